//! Enumerated attribute validation

use crate::{AttrValidator, Config, Context, ValidResult};
use tracing::trace;

/// Membership check against a small fixed value set.
///
/// Matching is case-insensitive unless constructed with
/// [`EnumValidator::case_sensitive`]; an insensitive match normalizes to
/// the declared spelling.
///
/// # Examples
///
/// ```
/// use tagwash_attrs::{AttrValidator, Config, Context, EnumValidator};
///
/// let v = EnumValidator::new(["left", "right", "center"]);
/// let config = Config::default();
/// let mut ctx = Context::new();
///
/// assert_eq!(v.validate("LEFT", &config, &mut ctx).value(), Some("left"));
/// assert!(v.validate("diagonal", &config, &mut ctx).is_rejected());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValidator {
	values: Vec<String>,
	case_sensitive: bool,
}

impl EnumValidator {
	/// Case-insensitive membership over `values` (the declared spellings
	/// are what accepted values normalize to).
	pub fn new<I, S>(values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			values: values.into_iter().map(Into::into).collect(),
			case_sensitive: false,
		}
	}

	/// Exact-spelling membership over `values`.
	pub fn case_sensitive<I, S>(values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			values: values.into_iter().map(Into::into).collect(),
			case_sensitive: true,
		}
	}

	pub fn values(&self) -> &[String] {
		&self.values
	}

	pub fn is_case_sensitive(&self) -> bool {
		self.case_sensitive
	}

	// Value sets are a handful of entries; a linear scan beats a second
	// lookup structure.
	fn canonical(&self, raw: &str) -> Option<&str> {
		self.values
			.iter()
			.find(|v| {
				if self.case_sensitive {
					v.as_str() == raw
				} else {
					v.eq_ignore_ascii_case(raw)
				}
			})
			.map(String::as_str)
	}
}

impl AttrValidator for EnumValidator {
	fn validate(&self, raw: &str, _config: &Config, _context: &mut Context) -> ValidResult {
		match self.canonical(raw.trim()) {
			Some(canonical) => ValidResult::Accepted(canonical.to_string()),
			None => {
				trace!(value = raw, "enum value not in allowed set");
				ValidResult::Rejected
			}
		}
	}
}
