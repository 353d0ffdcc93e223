//! URI attribute validation
//!
//! Shared validation logic for all URI-typed attributes: parse, apply the
//! configured scheme whitelist, and re-serialize in normalized form
//! (lowercase scheme and host, disallowed characters percent-encoded).
//! Subtype-specific parsing lives in the variants; see [`email`].

pub mod email;

use crate::{AttrValidator, Config, Context, ValidResult};
use tagwash_uri::Uri;
use tracing::trace;

/// Validates generic URI references against the run's policy.
///
/// Raw whitespace and control characters are rejected rather than
/// repaired, since a legitimate URI carries them percent-encoded. Other
/// disallowed characters are percent-encoded on output. Scheme
/// comparison is case-insensitive; scheme-less references pass only when
/// the policy admits relative URIs.
///
/// # Examples
///
/// ```
/// use tagwash_attrs::{AttrValidator, Config, Context, UriValidator};
///
/// let v = UriValidator::new();
/// let config = Config::default();
/// let mut ctx = Context::new();
///
/// assert_eq!(
///     v.validate("HTTP://Example.COM/a%20b", &config, &mut ctx).value(),
///     Some("http://example.com/a%20b"),
/// );
/// assert!(v.validate("http://example.com/a b", &config, &mut ctx).is_rejected());
/// assert!(v.validate("javascript:alert(1)", &config, &mut ctx).is_rejected());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UriValidator;

impl UriValidator {
	pub fn new() -> Self {
		Self
	}
}

impl AttrValidator for UriValidator {
	fn validate(&self, raw: &str, config: &Config, _context: &mut Context) -> ValidResult {
		let s = raw.trim();
		if s.is_empty() || !config.within_length(s) {
			return ValidResult::Rejected;
		}
		// interior whitespace must arrive percent-encoded; control
		// characters are caught by the parser
		if s.chars().any(|c| c.is_whitespace()) {
			trace!("raw whitespace inside URI value");
			return ValidResult::Rejected;
		}
		let uri = match Uri::parse(s) {
			Ok(uri) => uri,
			Err(err) => {
				trace!(%err, "unparseable URI value");
				return ValidResult::Rejected;
			}
		};
		match uri.scheme() {
			Some(scheme) if !config.allows_scheme(scheme) => {
				trace!(scheme, "URI scheme not in allowed set");
				return ValidResult::Rejected;
			}
			None if !config.allow_relative_uris => {
				trace!("relative URI reference not allowed by policy");
				return ValidResult::Rejected;
			}
			_ => {}
		}
		ValidResult::Accepted(uri.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn run(raw: &str) -> ValidResult {
		UriValidator::new().validate(raw, &Config::default(), &mut Context::new())
	}

	#[test]
	fn test_allowed_scheme_normalized() {
		assert_eq!(
			run("HTTPS://Example.COM/Path").value(),
			Some("https://example.com/Path"),
		);
	}

	#[rstest]
	#[case("javascript:alert(1)")]
	#[case("JAVASCRIPT:alert(1)")]
	#[case("data:text/html;base64,PHNjcmlwdD4=")]
	#[case("vbscript:msgbox")]
	fn test_disallowed_schemes_rejected(#[case] raw: &str) {
		assert!(run(raw).is_rejected());
	}

	#[test]
	fn test_scheme_whitelist_beats_well_formedness() {
		// perfectly structured, still not on the whitelist
		assert!(run("gopher://gopher.example.com:70/1/").is_rejected());
	}

	#[test]
	fn test_relative_references_follow_policy() {
		assert_eq!(run("/a/b?q=1").value(), Some("/a/b?q=1"));

		let strict = Config::default().with_relative_uris(false);
		let v = UriValidator::new();
		let mut ctx = Context::new();
		assert!(v.validate("/a/b", &strict, &mut ctx).is_rejected());
		assert_eq!(
			v.validate("https://ok.example/x", &strict, &mut ctx).value(),
			Some("https://ok.example/x"),
		);
	}

	#[test]
	fn test_disallowed_characters_encoded() {
		assert_eq!(
			run("http://example.com/ab\u{e9}").value(),
			Some("http://example.com/ab%C3%A9"),
		);
		assert_eq!(
			run("http://example.com/a|b").value(),
			Some("http://example.com/a%7Cb"),
		);
	}

	#[test]
	fn test_raw_whitespace_rejected() {
		assert!(run("http://example.com/a b").is_rejected());
		assert_eq!(
			run("http://example.com/a%20b").value(),
			Some("http://example.com/a%20b"),
		);
	}

	#[test]
	fn test_control_characters_rejected() {
		assert!(run("http://example.com/\u{1}x").is_rejected());
	}

	#[test]
	fn test_empty_rejected() {
		assert!(run("").is_rejected());
		assert!(run("   ").is_rejected());
	}

	#[test]
	fn test_length_cap_applies() {
		let config = Config::default().with_max_attribute_length(20);
		let v = UriValidator::new();
		let mut ctx = Context::new();
		let long = format!("http://example.com/{}", "x".repeat(50));
		assert!(v.validate(&long, &config, &mut ctx).is_rejected());
	}

	#[test]
	fn test_accepted_output_reparses_to_itself() {
		let out = run("http://u@example.com:8080/p?q=a%2Fb#f").into_value().unwrap();
		assert_eq!(run(&out).into_value().unwrap(), out);
	}
}
