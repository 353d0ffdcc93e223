//! Character-data normalization

/// Normalizes raw character data for reuse inside an attribute value.
///
/// Line endings (`\r\n`, lone `\r`) and horizontal tabs become single
/// spaces, since attribute values are single-line. Control characters outside
/// the markup Char production are deleted outright, never substituted.
/// The result is trimmed of leading and trailing spaces. Total on all
/// inputs; the empty string is a valid result.
///
/// # Examples
///
/// ```
/// use tagwash_attrs::cdata::normalize;
///
/// assert_eq!(normalize("  hello\r\nworld\t"), "hello world");
/// assert_eq!(normalize("a\u{0}b\u{7f}c"), "abc");
/// assert_eq!(normalize("\u{1}\u{2}"), "");
/// ```
pub fn normalize(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut chars = raw.chars().peekable();
	while let Some(ch) = chars.next() {
		match ch {
			'\r' => {
				if chars.peek() == Some(&'\n') {
					chars.next();
				}
				out.push(' ');
			}
			'\n' | '\t' => out.push(' '),
			ch if is_forbidden(ch) => {}
			ch => out.push(ch),
		}
	}
	let trimmed = out.trim_matches(' ');
	if trimmed.len() == out.len() {
		out
	} else {
		trimmed.to_string()
	}
}

// C0 controls other than tab/LF/CR, plus DEL, fall outside the Char
// production.
fn is_forbidden(ch: char) -> bool {
	matches!(
		ch,
		'\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000C}' | '\u{000E}'..='\u{001F}' | '\u{007F}'
	)
}
