//! Free-text (CDATA) attribute validation

use crate::{AttrValidator, Config, Context, ValidResult, cdata};
use tracing::trace;

/// Accepts arbitrary text after character-data normalization.
///
/// Total except for the configured length cap; delegates entirely to
/// [`cdata::normalize`].
///
/// # Examples
///
/// ```
/// use tagwash_attrs::{AttrValidator, Config, Context, TextValidator};
///
/// let v = TextValidator::new();
/// let result = v.validate(" a\tb ", &Config::default(), &mut Context::new());
/// assert_eq!(result.value(), Some("a b"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextValidator;

impl TextValidator {
	pub fn new() -> Self {
		Self
	}
}

impl AttrValidator for TextValidator {
	fn validate(&self, raw: &str, config: &Config, _context: &mut Context) -> ValidResult {
		if !config.within_length(raw) {
			trace!(len = raw.len(), "text value over configured length cap");
			return ValidResult::Rejected;
		}
		ValidResult::Accepted(cdata::normalize(raw))
	}
}
