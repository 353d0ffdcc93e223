//! Email mailbox validation
//!
//! The email URI subtype validates mailbox-shaped values: a bare address
//! or a display-name/address pair. Decomposition ([`EmailValidator::unpack`])
//! is deliberately separate from the validation decision: an input that
//! cannot be decomposed is *unresolved*, and only `validate` turns that
//! into a rejection.

use crate::{AttrValidator, Config, Context, ValidResult};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;

// Pragmatic addr-spec: dotted alphanumeric domain with at least two
// labels, liberal local part. Anchored character-class scan, linear time.
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$",
	)
	.expect("ADDRESS: invalid regex pattern")
});

/// An email address with an optional human-readable display name.
///
/// The canonical serialization is `"Display Name" <address>`, or the bare
/// address when the display name is empty. Quotes and backslashes inside
/// the display name are escaped on output, so canonical forms round-trip
/// through [`EmailValidator::unpack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
	pub display_name: String,
	pub address: String,
}

impl Mailbox {
	pub fn new(display_name: impl Into<String>, address: impl Into<String>) -> Self {
		Self {
			display_name: display_name.into(),
			address: address.into(),
		}
	}
}

impl fmt::Display for Mailbox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.display_name.is_empty() {
			return f.write_str(&self.address);
		}
		f.write_str("\"")?;
		for ch in self.display_name.chars() {
			if ch == '"' || ch == '\\' {
				f.write_str("\\")?;
			}
			write!(f, "{ch}")?;
		}
		write!(f, "\" <{}>", self.address)
	}
}

/// Validates email mailbox values (`mailto` URI subtype).
///
/// # Examples
///
/// ```
/// use tagwash_attrs::{AttrValidator, Config, Context, EmailValidator, Mailbox};
///
/// let mb = EmailValidator::unpack("\"Jane Doe\" <jane@example.com>").unwrap();
/// assert_eq!(mb, Mailbox::new("Jane Doe", "jane@example.com"));
/// assert_eq!(mb.to_string(), "\"Jane Doe\" <jane@example.com>");
///
/// // not decomposable into a plausible mailbox shape
/// assert!(EmailValidator::unpack("<<bad>>").is_none());
///
/// let v = EmailValidator::new();
/// let result = v.validate("jane@example.com", &Config::default(), &mut Context::new());
/// assert_eq!(result.value(), Some("jane@example.com"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}

	/// Best-effort decomposition of a mailbox string into display name and
	/// address. Returns `None` when the input does not have a plausible
	/// mailbox shape. That is an *unresolved* outcome, not a validation
	/// verdict; [`AttrValidator::validate`] maps it to rejection.
	///
	/// Accepted shapes, scanned in one pass:
	/// - `address`
	/// - `Display Name <address>`
	/// - `"Display Name" <address>` (quotes stripped, `\"`/`\\` unescaped)
	pub fn unpack(raw: &str) -> Option<Mailbox> {
		let s = raw.trim();
		if s.is_empty() {
			return None;
		}

		let opens = s.bytes().filter(|&b| b == b'<').count();
		let closes = s.bytes().filter(|&b| b == b'>').count();
		if opens != closes || opens > 1 {
			return None;
		}

		if opens == 0 {
			// bare address: no whitespace or quoting allowed
			if s.chars().any(|c| c.is_whitespace()) || s.contains('"') {
				return None;
			}
			return Some(Mailbox::new("", s));
		}

		let lt = s.find('<')?;
		let gt = s.find('>')?;
		// the angle-bracket segment must close the string
		if gt < lt || gt != s.len() - 1 {
			return None;
		}
		let address = s[lt + 1..gt].trim();
		if address.is_empty()
			|| address.chars().any(|c| c.is_whitespace())
			|| address.contains('"')
		{
			return None;
		}

		let display_part = s[..lt].trim();
		let display_name = if let Some(quoted) = display_part.strip_prefix('"') {
			unquote_display(quoted)?
		} else {
			display_part.to_string()
		};

		Some(Mailbox::new(display_name, address.to_string()))
	}
}

// Scans a quoted display name (opening quote already stripped). The
// closing quote must end the segment; escaped pairs pass the escaped
// character through.
fn unquote_display(quoted: &str) -> Option<String> {
	let mut out = String::with_capacity(quoted.len());
	let mut chars = quoted.chars();
	while let Some(ch) = chars.next() {
		match ch {
			'\\' => out.push(chars.next()?),
			'"' => {
				return if chars.as_str().trim().is_empty() {
					Some(out)
				} else {
					// stray text between the closing quote and '<'
					None
				};
			}
			_ => out.push(ch),
		}
	}
	// unterminated quote
	None
}

impl AttrValidator for EmailValidator {
	fn validate(&self, raw: &str, config: &Config, _context: &mut Context) -> ValidResult {
		let s = raw.trim();
		let (had_scheme, rest) = match strip_mailto(s) {
			Some(rest) => (true, rest),
			None => (false, s),
		};
		if had_scheme && !config.allows_scheme("mailto") {
			trace!("mailto scheme not in allowed set");
			return ValidResult::Rejected;
		}
		let mailbox = match Self::unpack(rest) {
			Some(mb) => mb,
			None => {
				trace!("value does not decompose into a mailbox");
				return ValidResult::Rejected;
			}
		};
		if !ADDRESS.is_match(&mailbox.address) {
			trace!(address = %mailbox.address, "implausible email address");
			return ValidResult::Rejected;
		}
		if had_scheme {
			ValidResult::Accepted(format!("mailto:{mailbox}"))
		} else {
			ValidResult::Accepted(mailbox.to_string())
		}
	}
}

fn strip_mailto(s: &str) -> Option<&str> {
	match s.get(..7) {
		Some(prefix) if prefix.eq_ignore_ascii_case("mailto:") => Some(&s[7..]),
		_ => None,
	}
}
