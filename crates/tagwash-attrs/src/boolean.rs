//! Boolean attribute validation with an identity-preserving factory
//!
//! HTML boolean attributes (`checked`, `disabled`, `selected`, …) carry no
//! value payload, only presence. Any non-empty input therefore normalizes
//! to the canonical attribute name; an empty value reads as absence and is
//! rejected so the engine drops the attribute.

use crate::{AttrValidator, Config, Context, ValidResult};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

// Attribute-name space is small and finite in practice: the cache is
// unbounded and never evicted. The write lock guarantees at most one
// construction per name; construction is side-effect free either way.
static BOOL_CACHE: Lazy<RwLock<HashMap<String, Arc<BoolValidator>>>> =
	Lazy::new(|| RwLock::new(HashMap::new()));

/// Validator for HTML boolean attributes.
///
/// # Examples
///
/// ```
/// use tagwash_attrs::{AttrValidator, BoolValidator, Config, Context, ValidResult};
///
/// let v = BoolValidator::new("checked");
/// let config = Config::default();
/// let mut ctx = Context::new();
///
/// // any non-empty value coerces to the attribute name itself
/// assert_eq!(v.validate("yes", &config, &mut ctx).value(), Some("checked"));
/// assert_eq!(v.validate("checked", &config, &mut ctx).value(), Some("checked"));
///
/// // empty means absent
/// assert_eq!(v.validate("", &config, &mut ctx), ValidResult::Rejected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolValidator {
	name: String,
}

impl BoolValidator {
	/// Constructs an uncached validator for `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	/// Returns the process-wide shared instance for `name`.
	///
	/// Repeated calls with the same name return the identical `Arc`, so
	/// callers may rely on pointer identity to short-circuit
	/// reconstruction. Behavior is indistinguishable from
	/// [`BoolValidator::new`].
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use tagwash_attrs::BoolValidator;
	///
	/// let a = BoolValidator::make("disabled");
	/// let b = BoolValidator::make("disabled");
	/// assert!(Arc::ptr_eq(&a, &b));
	/// ```
	pub fn make(name: &str) -> Arc<Self> {
		if let Some(v) = BOOL_CACHE.read().get(name) {
			return Arc::clone(v);
		}
		let mut cache = BOOL_CACHE.write();
		Arc::clone(
			cache
				.entry(name.to_string())
				.or_insert_with(|| Arc::new(Self::new(name))),
		)
	}

	/// The canonical attribute name this validator emits.
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl AttrValidator for BoolValidator {
	fn validate(&self, raw: &str, _config: &Config, _context: &mut Context) -> ValidResult {
		if raw.trim().is_empty() {
			return ValidResult::Rejected;
		}
		ValidResult::Accepted(self.name.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("bar")]
	#[case("foo")]
	#[case("true")]
	#[case("0")]
	#[case("  x  ")]
	fn test_any_nonempty_value_coerces_to_name(#[case] raw: &str) {
		let v = BoolValidator::new("foo");
		let result = v.validate(raw, &Config::default(), &mut Context::new());
		assert_eq!(result, ValidResult::Accepted("foo".to_string()));
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("\t\n")]
	fn test_empty_value_rejected(#[case] raw: &str) {
		let v = BoolValidator::new("foo");
		let result = v.validate(raw, &Config::default(), &mut Context::new());
		assert_eq!(result, ValidResult::Rejected);
	}

	#[test]
	fn test_factory_returns_identical_instance() {
		let a = BoolValidator::make("factory-identity");
		let b = BoolValidator::make("factory-identity");
		assert!(Arc::ptr_eq(&a, &b));
		assert_eq!(a.name(), "factory-identity");
	}

	#[test]
	fn test_factory_distinguishes_names() {
		let a = BoolValidator::make("one");
		let b = BoolValidator::make("two");
		assert!(!Arc::ptr_eq(&a, &b));
	}

	#[test]
	fn test_make_and_new_are_behaviorally_equivalent() {
		let config = Config::default();
		let mut ctx = Context::new();
		let direct = BoolValidator::new("multiple");
		let made = BoolValidator::make("multiple");
		for raw in ["", "multiple", "yes", " "] {
			assert_eq!(
				direct.validate(raw, &config, &mut ctx),
				made.validate(raw, &config, &mut ctx),
			);
		}
	}

	#[test]
	fn test_factory_is_safe_across_threads() {
		let handles: Vec<_> = (0..8)
			.map(|_| std::thread::spawn(|| BoolValidator::make("racy")))
			.collect();
		let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
		for v in &instances[1..] {
			assert!(Arc::ptr_eq(&instances[0], v));
		}
	}
}
