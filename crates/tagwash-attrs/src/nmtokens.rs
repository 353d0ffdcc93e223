//! Name-token list validation (class-like attributes)

use crate::{AttrValidator, Config, Context, ValidResult};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Nmtoken production adopted for HTML class-like attributes.
static NMTOKEN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z_:][-A-Za-z0-9_:.]*$").expect("NMTOKEN: invalid regex pattern")
});

/// Validates a whitespace-separated token list, keeping the tokens that
/// match the Nmtoken production and dropping duplicates (first occurrence
/// wins). Rejects when nothing survives.
#[derive(Debug, Clone, Copy, Default)]
pub struct NmtokensValidator;

impl NmtokensValidator {
	pub fn new() -> Self {
		Self
	}
}

impl AttrValidator for NmtokensValidator {
	fn validate(&self, raw: &str, _config: &Config, _context: &mut Context) -> ValidResult {
		let mut seen = HashSet::new();
		let mut kept = Vec::new();
		for token in raw.split_ascii_whitespace() {
			if NMTOKEN.is_match(token) && seen.insert(token) {
				kept.push(token);
			}
		}
		if kept.is_empty() {
			ValidResult::Rejected
		} else {
			ValidResult::Accepted(kept.join(" "))
		}
	}
}
