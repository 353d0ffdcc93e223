//! Sanitization policy shared by reference across one run
//!
//! `Config` is produced by the surrounding orchestrator (typically from a
//! settings file) and is read-only from the validators' perspective.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Immutable policy bag for one sanitization run.
///
/// # Examples
///
/// ```
/// use tagwash_attrs::Config;
///
/// let config = Config::default().with_schemes(["https"]);
/// assert!(config.allows_scheme("HTTPS"));
/// assert!(!config.allows_scheme("javascript"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// URI schemes admissible in URI-typed attributes, stored lowercase.
	pub allowed_schemes: HashSet<String>,
	/// Whether scheme-less (relative) URI references are admissible.
	pub allow_relative_uris: bool,
	/// Hard cap on attribute value length in bytes; 0 disables the cap.
	pub max_attribute_length: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			allowed_schemes: ["http", "https", "mailto", "ftp", "tel"]
				.into_iter()
				.map(str::to_string)
				.collect(),
			allow_relative_uris: true,
			max_attribute_length: 0,
		}
	}
}

impl Config {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the allowed-scheme set; entries are folded to lowercase.
	pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.allowed_schemes = schemes
			.into_iter()
			.map(|s| s.into().to_ascii_lowercase())
			.collect();
		self
	}

	pub fn with_relative_uris(mut self, allow: bool) -> Self {
		self.allow_relative_uris = allow;
		self
	}

	pub fn with_max_attribute_length(mut self, max: usize) -> Self {
		self.max_attribute_length = max;
		self
	}

	/// Case-insensitive scheme whitelist check.
	pub fn allows_scheme(&self, scheme: &str) -> bool {
		self.allowed_schemes.contains(&scheme.to_ascii_lowercase())
	}

	pub(crate) fn within_length(&self, raw: &str) -> bool {
		self.max_attribute_length == 0 || raw.len() <= self.max_attribute_length
	}
}
