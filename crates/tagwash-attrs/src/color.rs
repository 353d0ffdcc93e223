//! HTML color attribute validation

use crate::{AttrValidator, Config, Context, ValidResult};

// HTML4 color keywords and their hex values.
const KEYWORDS: &[(&str, &str)] = &[
	("aqua", "#00ffff"),
	("black", "#000000"),
	("blue", "#0000ff"),
	("fuchsia", "#ff00ff"),
	("gray", "#808080"),
	("green", "#008000"),
	("lime", "#00ff00"),
	("maroon", "#800000"),
	("navy", "#000080"),
	("olive", "#808000"),
	("purple", "#800080"),
	("red", "#ff0000"),
	("silver", "#c0c0c0"),
	("teal", "#008080"),
	("white", "#ffffff"),
	("yellow", "#ffff00"),
];

/// Validates `#RGB` / `#RRGGBB` hex colors and HTML4 color keywords.
///
/// Keywords are substituted by their hex value (`Coerced`); hex forms are
/// accepted normalized to lowercase `#rrggbb` with a shorthand `#RGB`
/// expanded.
///
/// # Examples
///
/// ```
/// use tagwash_attrs::{AttrValidator, ColorValidator, Config, Context, ValidResult};
///
/// let v = ColorValidator::new();
/// let config = Config::default();
/// let mut ctx = Context::new();
///
/// assert_eq!(
///     v.validate("Red", &config, &mut ctx),
///     ValidResult::Coerced("#ff0000".to_string()),
/// );
/// assert_eq!(v.validate("#ABC", &config, &mut ctx).value(), Some("#aabbcc"));
/// assert!(v.validate("not-a-color", &config, &mut ctx).is_rejected());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorValidator;

impl ColorValidator {
	pub fn new() -> Self {
		Self
	}
}

impl AttrValidator for ColorValidator {
	fn validate(&self, raw: &str, _config: &Config, _context: &mut Context) -> ValidResult {
		let s = raw.trim();
		if let Some((_, hex)) = KEYWORDS.iter().find(|(k, _)| k.eq_ignore_ascii_case(s)) {
			return ValidResult::Coerced((*hex).to_string());
		}

		let hex = s.strip_prefix('#').unwrap_or(s);
		if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return ValidResult::Rejected;
		}
		match hex.len() {
			6 => ValidResult::Accepted(format!("#{}", hex.to_ascii_lowercase())),
			3 => {
				let mut out = String::with_capacity(7);
				out.push('#');
				for b in hex.bytes() {
					let c = b.to_ascii_lowercase() as char;
					out.push(c);
					out.push(c);
				}
				ValidResult::Accepted(out)
			}
			_ => ValidResult::Rejected,
		}
	}
}
