//! ID attribute validation with run-scoped uniqueness

use crate::{AttrValidator, Config, Context, ValidResult};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

// Name production: IDs must start with a letter.
static ID_NAME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z][-A-Za-z0-9_:.]*$").expect("ID_NAME: invalid regex pattern")
});

/// Validates an ID token and enforces uniqueness within the run.
///
/// Accepted IDs are recorded in [`Context`]; a second occurrence of the
/// same ID in the same run is rejected so the sanitized document keeps
/// IDs unique.
///
/// # Examples
///
/// ```
/// use tagwash_attrs::{AttrValidator, Config, Context, IdValidator};
///
/// let v = IdValidator::new();
/// let config = Config::default();
/// let mut ctx = Context::new();
///
/// assert_eq!(v.validate("header", &config, &mut ctx).value(), Some("header"));
/// // same run, same ID: duplicate is dropped
/// assert!(v.validate("header", &config, &mut ctx).is_rejected());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IdValidator;

impl IdValidator {
	pub fn new() -> Self {
		Self
	}
}

impl AttrValidator for IdValidator {
	fn validate(&self, raw: &str, _config: &Config, context: &mut Context) -> ValidResult {
		let s = raw.trim();
		if !ID_NAME.is_match(s) {
			return ValidResult::Rejected;
		}
		if !context.register_id(s) {
			trace!(id = s, "duplicate ID within sanitization run");
			return ValidResult::Rejected;
		}
		ValidResult::Accepted(s.to_string())
	}
}
