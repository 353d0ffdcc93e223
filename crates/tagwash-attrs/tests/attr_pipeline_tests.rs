//! End-to-end validator-core tests
//!
//! Drives the registry and validators the way the enclosing tag engine
//! does: resolve each declared attribute type once at configuration time,
//! then validate attribute occurrences against a shared Config and a
//! per-run Context.

use std::collections::BTreeMap;
use std::sync::Arc;
use tagwash_attrs::{AttrValidator, Config, Context, ValidResult, registry};

/// A minimal stand-in for the tag engine's attribute schema: attribute
/// name to declared type specification.
fn schema() -> BTreeMap<&'static str, &'static str> {
	BTreeMap::from([
		("align", "Enum#left,right,center"),
		("alt", "Text"),
		("bgcolor", "Color"),
		("checked", "Bool#checked"),
		("class", "Nmtokens"),
		("height", "Pixels#1200"),
		("href", "URI"),
		("id", "ID"),
		("lang", "LanguageCode"),
		("width", "Length"),
	])
}

fn sanitize_attrs(
	attrs: &[(&str, &str)],
	config: &Config,
	ctx: &mut Context,
) -> Vec<(String, String)> {
	let schema = schema();
	let mut kept = Vec::new();
	for (attr, raw) in attrs {
		let Some(spec) = schema.get(attr) else {
			continue; // not whitelisted, engine drops it
		};
		let validator = registry().resolve(spec).expect("schema specs must resolve");
		match validator.validate(raw, config, ctx) {
			ValidResult::Accepted(v) | ValidResult::Coerced(v) => {
				kept.push((attr.to_string(), v));
			}
			ValidResult::Rejected => {}
		}
	}
	kept
}

#[test]
fn test_mixed_attribute_pass() {
	let config = Config::default();
	let mut ctx = Context::new();
	ctx.enter_tag("img");

	let kept = sanitize_attrs(
		&[
			("align", "LEFT"),
			("alt", "  a\tpicture  "),
			("bgcolor", "red"),
			("height", "9000"),
			("href", "https://example.com/a%20b"),
			("onclick", "alert(1)"),
			("width", "50%"),
		],
		&config,
		&mut ctx,
	);

	assert_eq!(
		kept,
		vec![
			("align".to_string(), "left".to_string()),
			("alt".to_string(), "a picture".to_string()),
			("bgcolor".to_string(), "#ff0000".to_string()),
			("height".to_string(), "1200".to_string()), // clamped
			("href".to_string(), "https://example.com/a%20b".to_string()),
			("width".to_string(), "50%".to_string()),
		],
	);
}

#[test]
fn test_rejections_drop_silently() {
	let config = Config::default().with_schemes(["https"]);
	let mut ctx = Context::new();

	let kept = sanitize_attrs(
		&[
			("href", "javascript:alert(1)"),
			("align", "diagonal"),
			("lang", "not a lang"),
			("checked", ""),
		],
		&config,
		&mut ctx,
	);
	assert!(kept.is_empty());
}

#[test]
fn test_id_uniqueness_spans_the_run() {
	let config = Config::default();
	let mut ctx = Context::new();

	let first = sanitize_attrs(&[("id", "main")], &config, &mut ctx);
	assert_eq!(first, vec![("id".to_string(), "main".to_string())]);

	// same run: duplicate dropped
	let second = sanitize_attrs(&[("id", "main")], &config, &mut ctx);
	assert!(second.is_empty());

	// new run, fresh context: accepted again
	let mut fresh = Context::new();
	let third = sanitize_attrs(&[("id", "main")], &config, &mut fresh);
	assert_eq!(third.len(), 1);
}

#[test]
fn test_boolean_attribute_coerces_to_presence() {
	let config = Config::default();
	let mut ctx = Context::new();
	let kept = sanitize_attrs(&[("checked", "whatever")], &config, &mut ctx);
	assert_eq!(kept, vec![("checked".to_string(), "checked".to_string())]);
}

#[test]
fn test_resolution_is_stable_across_threads() {
	let handles: Vec<_> = (0..8)
		.map(|_| std::thread::spawn(|| registry().resolve("Enum#threaded,test").unwrap()))
		.collect();
	let resolved: Vec<Arc<dyn AttrValidator>> =
		handles.into_iter().map(|h| h.join().unwrap()).collect();
	for v in &resolved[1..] {
		assert!(Arc::ptr_eq(&resolved[0], v));
	}
}

#[test]
fn test_config_errors_surface_before_any_validation() {
	// a schema author typo'd the type name: configuration loading must
	// fail loudly, not fall back to accepting anything
	let err = match registry().resolve("Enmu#left,right") {
		Err(err) => err,
		Ok(_) => panic!("typo'd type spec must not resolve"),
	};
	assert!(err.to_string().contains("Enmu"));
}
