//! Pixel, length and multi-length attribute validation
//!
//! The three families share the numeric core: `Pixels` is a plain count
//! with an optional clamp, `Length` adds percentages, `MultiLength` adds
//! the relative `*` forms used by frameset-era attributes.

use crate::{AttrValidator, Config, Context, ValidResult};

// Digits with an optional CSS-style "px" suffix tolerated and stripped.
fn parse_pixels(s: &str) -> Option<u64> {
	let s = s.strip_suffix("px").unwrap_or(s).trim_end();
	if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	s.parse().ok()
}

/// Validates a non-negative pixel count, optionally clamped to a maximum.
///
/// # Examples
///
/// ```
/// use tagwash_attrs::{AttrValidator, Config, Context, PixelsValidator, ValidResult};
///
/// let v = PixelsValidator::with_max(600);
/// let config = Config::default();
/// let mut ctx = Context::new();
///
/// assert_eq!(v.validate("42", &config, &mut ctx).value(), Some("42"));
/// assert_eq!(v.validate("50px", &config, &mut ctx).value(), Some("50"));
/// assert_eq!(
///     v.validate("9000", &config, &mut ctx),
///     ValidResult::Coerced("600".to_string()),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelsValidator {
	max: Option<u64>,
}

impl PixelsValidator {
	pub fn new() -> Self {
		Self { max: None }
	}

	pub fn with_max(max: u64) -> Self {
		Self { max: Some(max) }
	}
}

impl AttrValidator for PixelsValidator {
	fn validate(&self, raw: &str, _config: &Config, _context: &mut Context) -> ValidResult {
		match parse_pixels(raw.trim()) {
			None => ValidResult::Rejected,
			Some(n) => match self.max {
				Some(max) if n > max => ValidResult::Coerced(max.to_string()),
				_ => ValidResult::Accepted(n.to_string()),
			},
		}
	}
}

/// Validates a pixel count or a percentage (`0%`–`100%`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthValidator {
	max_pixels: Option<u64>,
}

impl LengthValidator {
	pub fn new() -> Self {
		Self { max_pixels: None }
	}

	pub fn with_max_pixels(max: u64) -> Self {
		Self {
			max_pixels: Some(max),
		}
	}
}

impl AttrValidator for LengthValidator {
	fn validate(&self, raw: &str, config: &Config, context: &mut Context) -> ValidResult {
		let s = raw.trim();
		if let Some(digits) = s.strip_suffix('%') {
			return match digits.parse::<u64>() {
				Ok(n) if digits.bytes().all(|b| b.is_ascii_digit()) && n <= 100 => {
					ValidResult::Accepted(format!("{n}%"))
				}
				_ => ValidResult::Rejected,
			};
		}
		let pixels = match self.max_pixels {
			Some(max) => PixelsValidator::with_max(max),
			None => PixelsValidator::new(),
		};
		pixels.validate(s, config, context)
	}
}

/// Validates lengths plus the relative `*` and `N*` forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiLengthValidator;

impl MultiLengthValidator {
	pub fn new() -> Self {
		Self
	}
}

impl AttrValidator for MultiLengthValidator {
	fn validate(&self, raw: &str, config: &Config, context: &mut Context) -> ValidResult {
		let s = raw.trim();
		if s == "*" {
			return ValidResult::Accepted("*".to_string());
		}
		if let Some(digits) = s.strip_suffix('*') {
			if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
				return match digits.parse::<u64>() {
					// "1*" and "*" are the same relative weight
					Ok(1) => ValidResult::Accepted("*".to_string()),
					Ok(n) => ValidResult::Accepted(format!("{n}*")),
					Err(_) => ValidResult::Rejected,
				};
			}
			return ValidResult::Rejected;
		}
		LengthValidator::new().validate(s, config, context)
	}
}
