//! Signed integer attribute validation

use crate::{AttrValidator, Config, Context, ValidResult};

/// Validates signed decimal integers, with flags controlling which ranges
/// are admissible. Output is normalized: a leading `+` is dropped and
/// `-0` becomes `0`.
#[derive(Debug, Clone, Copy)]
pub struct IntegerValidator {
	negative: bool,
	zero: bool,
	positive: bool,
}

impl IntegerValidator {
	/// Accepts any integer.
	pub fn new() -> Self {
		Self {
			negative: true,
			zero: true,
			positive: true,
		}
	}

	/// Accepts zero and positive integers.
	pub fn non_negative() -> Self {
		Self {
			negative: false,
			zero: true,
			positive: true,
		}
	}

	/// Accepts strictly positive integers.
	pub fn positive_only() -> Self {
		Self {
			negative: false,
			zero: false,
			positive: true,
		}
	}
}

impl Default for IntegerValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl AttrValidator for IntegerValidator {
	fn validate(&self, raw: &str, _config: &Config, _context: &mut Context) -> ValidResult {
		let s = raw.trim();
		let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
		if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
			return ValidResult::Rejected;
		}
		let value: i64 = match s.strip_prefix('+').unwrap_or(s).parse() {
			Ok(v) => v,
			Err(_) => return ValidResult::Rejected,
		};
		let admissible = match value {
			v if v < 0 => self.negative,
			0 => self.zero,
			_ => self.positive,
		};
		if admissible {
			ValidResult::Accepted(value.to_string())
		} else {
			ValidResult::Rejected
		}
	}
}
