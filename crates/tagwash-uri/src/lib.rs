//! # tagwash-uri
//!
//! Minimal URI handling for the tagwash sanitizer: a linear-time RFC 3986
//! splitter, component-aware percent-encoding and a normalizing serializer.
//!
//! The parser is a single forward scan with no backtracking, so parse time
//! is bounded by input length even on adversarial inputs. Scheme and host
//! are folded to lowercase at parse time; everything else is normalized at
//! serialization time by [`percent::encode`].
//!
//! ## Example
//!
//! ```
//! use tagwash_uri::Uri;
//!
//! let uri = Uri::parse("HTTP://Example.COM:8080/a b?q=1#top").unwrap();
//! assert_eq!(uri.scheme(), Some("http"));
//! assert_eq!(uri.host(), Some("example.com"));
//! assert_eq!(uri.to_string(), "http://example.com:8080/a%20b?q=1#top");
//! ```

pub mod percent;

use percent::Component;
use std::fmt;
use thiserror::Error;

/// Errors produced while splitting a URI reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriParseError {
	/// A control character appeared in the input at the given byte offset.
	#[error("forbidden character at byte {0}")]
	ForbiddenCharacter(usize),
	/// The authority's port was not a decimal number in range.
	#[error("invalid port in authority")]
	InvalidPort,
	/// The authority's host was malformed (e.g. unbalanced IPv6 brackets).
	#[error("invalid host in authority")]
	InvalidHost,
}

/// The authority component: `[userinfo@]host[:port]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
	userinfo: Option<String>,
	host: String,
	port: Option<u16>,
}

impl Authority {
	pub fn userinfo(&self) -> Option<&str> {
		self.userinfo.as_deref()
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn port(&self) -> Option<u16> {
		self.port
	}
}

/// A parsed URI reference, absolute or relative.
///
/// # Examples
///
/// ```
/// use tagwash_uri::Uri;
///
/// let abs = Uri::parse("https://example.com/path").unwrap();
/// assert!(!abs.is_relative());
///
/// let rel = Uri::parse("/path?q=1").unwrap();
/// assert!(rel.is_relative());
/// assert_eq!(rel.path(), "/path");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
	scheme: Option<String>,
	authority: Option<Authority>,
	path: String,
	query: Option<String>,
	fragment: Option<String>,
}

impl Uri {
	/// Splits a URI reference into its components in one forward scan.
	///
	/// Control characters anywhere in the input are an error; all other
	/// byte-level cleanup (percent-encoding of disallowed characters) is
	/// deferred to serialization.
	pub fn parse(input: &str) -> Result<Self, UriParseError> {
		if let Some(pos) = input.bytes().position(|b| b < 0x20 || b == 0x7F) {
			return Err(UriParseError::ForbiddenCharacter(pos));
		}

		let (scheme, rest) = split_scheme(input);
		let (authority, rest) = if let Some(after) = rest.strip_prefix("//") {
			let end = after
				.find(['/', '?', '#'])
				.unwrap_or(after.len());
			let (auth, tail) = after.split_at(end);
			(Some(parse_authority(auth)?), tail)
		} else {
			(None, rest)
		};

		let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
		let (path, rest) = rest.split_at(path_end);

		let (query, fragment) = if let Some(after) = rest.strip_prefix('?') {
			match after.split_once('#') {
				Some((q, f)) => (Some(q.to_string()), Some(f.to_string())),
				None => (Some(after.to_string()), None),
			}
		} else if let Some(after) = rest.strip_prefix('#') {
			(None, Some(after.to_string()))
		} else {
			(None, None)
		};

		Ok(Self {
			scheme: scheme.map(|s| s.to_ascii_lowercase()),
			authority,
			path: path.to_string(),
			query,
			fragment,
		})
	}

	/// Lowercased scheme, absent for relative references.
	pub fn scheme(&self) -> Option<&str> {
		self.scheme.as_deref()
	}

	pub fn authority(&self) -> Option<&Authority> {
		self.authority.as_ref()
	}

	/// Lowercased host, absent when there is no authority.
	pub fn host(&self) -> Option<&str> {
		self.authority.as_ref().map(|a| a.host.as_str())
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	pub fn fragment(&self) -> Option<&str> {
		self.fragment.as_deref()
	}

	/// A reference with no scheme is relative.
	pub fn is_relative(&self) -> bool {
		self.scheme.is_none()
	}
}

impl fmt::Display for Uri {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(scheme) = &self.scheme {
			write!(f, "{scheme}:")?;
		}
		if let Some(auth) = &self.authority {
			f.write_str("//")?;
			if let Some(userinfo) = &auth.userinfo {
				write!(f, "{}@", percent::encode(userinfo, Component::Userinfo))?;
			}
			if auth.host.starts_with('[') {
				// IPv6 literal, brackets are structural
				f.write_str(&auth.host)?;
			} else {
				f.write_str(&percent::encode(&auth.host, Component::Host))?;
			}
			if let Some(port) = auth.port {
				write!(f, ":{port}")?;
			}
		}
		f.write_str(&percent::encode(&self.path, Component::Path))?;
		if let Some(query) = &self.query {
			write!(f, "?{}", percent::encode(query, Component::Query))?;
		}
		if let Some(fragment) = &self.fragment {
			write!(f, "#{}", percent::encode(fragment, Component::Fragment))?;
		}
		Ok(())
	}
}

/// Scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) followed by ":".
/// Anything else (including a "/?#" before the colon) means the reference
/// is relative and the whole input is treated as hier-part.
fn split_scheme(input: &str) -> (Option<&str>, &str) {
	let bytes = input.as_bytes();
	for (i, &b) in bytes.iter().enumerate() {
		match b {
			b':' if i > 0 => return (Some(&input[..i]), &input[i + 1..]),
			b'/' | b'?' | b'#' => return (None, input),
			_ if i == 0 && b.is_ascii_alphabetic() => {}
			_ if i > 0 && (b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')) => {}
			_ => return (None, input),
		}
	}
	(None, input)
}

fn parse_authority(auth: &str) -> Result<Authority, UriParseError> {
	// userinfo ends at the last '@'; '@' may legally occur (encoded or not)
	// inside userinfo but never inside host
	let (userinfo, hostport) = match auth.rfind('@') {
		Some(at) => (Some(auth[..at].to_string()), &auth[at + 1..]),
		None => (None, auth),
	};

	let (host, port_str) = if let Some(after) = hostport.strip_prefix('[') {
		let close = after.find(']').ok_or(UriParseError::InvalidHost)?;
		let host = &hostport[..close + 2];
		match &hostport[close + 2..] {
			"" => (host.to_string(), None),
			rest => {
				let digits = rest.strip_prefix(':').ok_or(UriParseError::InvalidHost)?;
				(host.to_string(), Some(digits))
			}
		}
	} else {
		match hostport.rsplit_once(':') {
			Some((h, p)) => {
				// a raw ':' cannot occur in a reg-name, so whatever is
				// left of the last ':' must be the complete host
				if h.contains(':') {
					return Err(UriParseError::InvalidHost);
				}
				(h.to_ascii_lowercase(), Some(p))
			}
			None => (hostport.to_ascii_lowercase(), None),
		}
	};

	let port = match port_str {
		None | Some("") => None,
		Some(digits) => {
			if !digits.bytes().all(|b| b.is_ascii_digit()) {
				return Err(UriParseError::InvalidPort);
			}
			Some(digits.parse::<u16>().map_err(|_| UriParseError::InvalidPort)?)
		}
	};

	Ok(Authority {
		userinfo,
		host,
		port,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_parse_full_uri() {
		let uri = Uri::parse("https://user@example.com:443/a/b?q=1#frag").unwrap();
		assert_eq!(uri.scheme(), Some("https"));
		let auth = uri.authority().unwrap();
		assert_eq!(auth.userinfo(), Some("user"));
		assert_eq!(auth.host(), "example.com");
		assert_eq!(auth.port(), Some(443));
		assert_eq!(uri.path(), "/a/b");
		assert_eq!(uri.query(), Some("q=1"));
		assert_eq!(uri.fragment(), Some("frag"));
	}

	#[test]
	fn test_scheme_and_host_lowercased() {
		let uri = Uri::parse("HTTPS://WWW.Example.COM/Path").unwrap();
		assert_eq!(uri.scheme(), Some("https"));
		assert_eq!(uri.host(), Some("www.example.com"));
		// path case is significant and preserved
		assert_eq!(uri.path(), "/Path");
	}

	#[rstest]
	#[case("/relative/path")]
	#[case("relative")]
	#[case("?only=query")]
	#[case("#only-fragment")]
	#[case("//example.com/net-path")]
	fn test_relative_references(#[case] input: &str) {
		assert!(Uri::parse(input).unwrap().is_relative());
	}

	#[test]
	fn test_colon_in_first_segment_reads_as_scheme() {
		// per RFC 3986 "a:b" is scheme "a" with path "b"
		let uri = Uri::parse("a:b").unwrap();
		assert_eq!(uri.scheme(), Some("a"));
		assert_eq!(uri.path(), "b");
	}

	#[test]
	fn test_slash_before_colon_is_not_a_scheme() {
		let uri = Uri::parse("a/b:c").unwrap();
		assert!(uri.is_relative());
		assert_eq!(uri.path(), "a/b:c");
	}

	#[test]
	fn test_mailto_is_opaque_path() {
		let uri = Uri::parse("mailto:jane@example.com").unwrap();
		assert_eq!(uri.scheme(), Some("mailto"));
		assert!(uri.authority().is_none());
		assert_eq!(uri.path(), "jane@example.com");
	}

	#[test]
	fn test_ipv6_host() {
		let uri = Uri::parse("http://[2001:db8::1]:8080/x").unwrap();
		let auth = uri.authority().unwrap();
		assert_eq!(auth.host(), "[2001:db8::1]");
		assert_eq!(auth.port(), Some(8080));
	}

	#[test]
	fn test_unclosed_ipv6_bracket() {
		assert_eq!(
			Uri::parse("http://[2001:db8::1/x"),
			Err(UriParseError::InvalidHost)
		);
	}

	#[rstest]
	#[case("http://example.com:99999/")]
	#[case("http://example.com:-1/")]
	fn test_bad_ports(#[case] input: &str) {
		assert!(Uri::parse(input).is_err());
	}

	#[test]
	fn test_empty_port_is_none() {
		let uri = Uri::parse("http://example.com:/x").unwrap();
		assert_eq!(uri.authority().unwrap().port(), None);
	}

	#[test]
	fn test_control_character_rejected() {
		assert_eq!(
			Uri::parse("http://exa\x01mple.com"),
			Err(UriParseError::ForbiddenCharacter(10))
		);
	}

	#[test]
	fn test_userinfo_split_at_last_at() {
		let uri = Uri::parse("ftp://u@ser@host/x").unwrap();
		let auth = uri.authority().unwrap();
		assert_eq!(auth.userinfo(), Some("u@ser"));
		assert_eq!(auth.host(), "host");
	}

	#[test]
	fn test_serialization_encodes_components() {
		let uri = Uri::parse("http://example.com/a b c?q=x y#f g").unwrap();
		assert_eq!(
			uri.to_string(),
			"http://example.com/a%20b%20c?q=x%20y#f%20g"
		);
	}

	#[test]
	fn test_serialization_idempotent() {
		let once = Uri::parse("http://example.com/a b?x=%2f")
			.unwrap()
			.to_string();
		let twice = Uri::parse(&once).unwrap().to_string();
		assert_eq!(once, twice);
	}

	#[test]
	fn test_display_roundtrip_normalized_input() {
		let s = "https://example.com/path?q=1#top";
		assert_eq!(Uri::parse(s).unwrap().to_string(), s);
	}
}
