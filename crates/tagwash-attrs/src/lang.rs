//! Language-tag attribute validation

use crate::{AttrValidator, Config, Context, ValidResult};

/// Validates RFC-style language tags (`en`, `en-US`, `zh-Hant-TW`).
///
/// Structure: a 1–8 letter primary subtag followed by `-`-separated
/// alphanumeric subtags of 1–8 characters. Case is normalized the
/// conventional way: primary subtag lowercase, a two-letter second
/// subtag uppercase (region), everything else lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LangValidator;

impl LangValidator {
	pub fn new() -> Self {
		Self
	}
}

impl AttrValidator for LangValidator {
	fn validate(&self, raw: &str, _config: &Config, _context: &mut Context) -> ValidResult {
		let s = raw.trim();
		if s.is_empty() {
			return ValidResult::Rejected;
		}
		let mut out = String::with_capacity(s.len());
		for (i, subtag) in s.split('-').enumerate() {
			if subtag.is_empty() || subtag.len() > 8 {
				return ValidResult::Rejected;
			}
			let valid = if i == 0 {
				subtag.bytes().all(|b| b.is_ascii_alphabetic())
			} else {
				subtag.bytes().all(|b| b.is_ascii_alphanumeric())
			};
			if !valid {
				return ValidResult::Rejected;
			}
			if i > 0 {
				out.push('-');
			}
			if i == 1 && subtag.len() == 2 {
				out.push_str(&subtag.to_ascii_uppercase());
			} else {
				out.push_str(&subtag.to_ascii_lowercase());
			}
		}
		ValidResult::Accepted(out)
	}
}
