//! Attribute-type registry and dispatch
//!
//! Configuration schemas declare attribute types by name, optionally with
//! `#`-delimited parameters ("Enum#left,right", "Bool#checked",
//! "Pixels#600"). The registry turns those specifications into validator
//! instances and caches them so one specification maps to one instance
//! for the registry's lifetime.
//!
//! Resolution failures are configuration bugs: a whitelist that names an
//! unknown type or garbles a parameter list is security-relevant, so
//! `resolve` fails loudly instead of degrading to a permissive default.

use crate::boolean::BoolValidator;
use crate::color::ColorValidator;
use crate::enumerated::EnumValidator;
use crate::id::IdValidator;
use crate::integer::IntegerValidator;
use crate::lang::LangValidator;
use crate::length::{LengthValidator, MultiLengthValidator, PixelsValidator};
use crate::nmtokens::NmtokensValidator;
use crate::text::TextValidator;
use crate::uri::UriValidator;
use crate::uri::email::EmailValidator;
use crate::AttrValidator;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised while resolving an attribute-type specification.
///
/// Both variants abort configuration loading; they are never produced
/// during sanitization itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	#[error("unknown validator type `{0}`")]
	UnknownValidatorType(String),

	#[error("invalid parameters `{params}` for validator type `{name}`: {reason}")]
	InvalidValidatorParameters {
		name: String,
		params: String,
		reason: String,
	},
}

/// Maps attribute-type specifications to shared validator instances.
///
/// The identity cache generalizes the boolean factory's contract: two
/// resolutions of the same specification return the identical `Arc`
/// (pointer equality), for the lifetime of the registry.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tagwash_attrs::registry::AttrTypeRegistry;
///
/// let registry = AttrTypeRegistry::new();
/// let a = registry.resolve("Enum#left,right").unwrap();
/// let b = registry.resolve("Enum#left,right").unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
///
/// assert!(registry.resolve("NotARealType").is_err());
/// ```
#[derive(Default)]
pub struct AttrTypeRegistry {
	cache: RwLock<HashMap<String, Arc<dyn AttrValidator>>>,
}

impl AttrTypeRegistry {
	pub fn new() -> Self {
		Self {
			cache: RwLock::new(HashMap::new()),
		}
	}

	/// Resolves a type specification to a validator, constructing it on
	/// first use and returning the cached instance afterwards.
	pub fn resolve(&self, type_spec: &str) -> Result<Arc<dyn AttrValidator>, RegistryError> {
		if let Some(v) = self.cache.read().get(type_spec) {
			return Ok(Arc::clone(v));
		}
		let built = construct(type_spec)?;
		let mut cache = self.cache.write();
		let entry = cache.entry(type_spec.to_string()).or_insert(built);
		debug!(type_spec, "resolved attribute validator");
		Ok(Arc::clone(entry))
	}
}

fn invalid(name: &str, params: &str, reason: &str) -> RegistryError {
	RegistryError::InvalidValidatorParameters {
		name: name.to_string(),
		params: params.to_string(),
		reason: reason.to_string(),
	}
}

fn construct(type_spec: &str) -> Result<Arc<dyn AttrValidator>, RegistryError> {
	let (name, params) = match type_spec.split_once('#') {
		Some((name, params)) => (name, Some(params)),
		None => (type_spec, None),
	};

	// parameter-less types reject stray parameters loudly rather than
	// ignoring a likely schema typo
	let no_params = |params: Option<&str>| -> Result<(), RegistryError> {
		match params {
			None => Ok(()),
			Some(p) => Err(invalid(name, p, "type takes no parameters")),
		}
	};

	match name {
		"CDATA" | "Text" => {
			no_params(params)?;
			Ok(Arc::new(TextValidator::new()))
		}
		"Bool" => {
			let attr = params.ok_or_else(|| {
				invalid(name, "", "attribute name parameter is required")
			})?;
			if attr.is_empty() || attr.chars().any(|c| c.is_whitespace()) {
				return Err(invalid(name, attr, "attribute name must be a single token"));
			}
			let shared: Arc<dyn AttrValidator> = BoolValidator::make(attr);
			Ok(shared)
		}
		"Enum" => {
			let params = params.ok_or_else(|| {
				invalid(name, "", "comma-separated value list is required")
			})?;
			let (case_sensitive, list) = match params.strip_prefix("s:") {
				Some(rest) => (true, rest),
				None => (false, params),
			};
			let values: Vec<&str> = list
				.split(',')
				.map(str::trim)
				.filter(|v| !v.is_empty())
				.collect();
			if values.is_empty() {
				return Err(invalid(name, params, "value list is empty"));
			}
			let validator = if case_sensitive {
				EnumValidator::case_sensitive(values)
			} else {
				EnumValidator::new(values)
			};
			Ok(Arc::new(validator))
		}
		"Color" => {
			no_params(params)?;
			Ok(Arc::new(ColorValidator::new()))
		}
		"Length" => {
			no_params(params)?;
			Ok(Arc::new(LengthValidator::new()))
		}
		"MultiLength" => {
			no_params(params)?;
			Ok(Arc::new(MultiLengthValidator::new()))
		}
		"Pixels" => match params {
			None => Ok(Arc::new(PixelsValidator::new())),
			Some(p) => {
				let max: u64 = p
					.parse()
					.map_err(|_| invalid(name, p, "maximum must be a non-negative integer"))?;
				Ok(Arc::new(PixelsValidator::with_max(max)))
			}
		},
		"Integer" => {
			no_params(params)?;
			Ok(Arc::new(IntegerValidator::new()))
		}
		"LanguageCode" => {
			no_params(params)?;
			Ok(Arc::new(LangValidator::new()))
		}
		"Nmtokens" => {
			no_params(params)?;
			Ok(Arc::new(NmtokensValidator::new()))
		}
		"ID" => {
			no_params(params)?;
			Ok(Arc::new(IdValidator::new()))
		}
		"URI" => {
			no_params(params)?;
			Ok(Arc::new(UriValidator::new()))
		}
		"Email" => {
			no_params(params)?;
			Ok(Arc::new(EmailValidator::new()))
		}
		other => Err(RegistryError::UnknownValidatorType(other.to_string())),
	}
}

static DEFAULT_REGISTRY: Lazy<AttrTypeRegistry> = Lazy::new(AttrTypeRegistry::new);

/// The process-wide default registry.
pub fn registry() -> &'static AttrTypeRegistry {
	&DEFAULT_REGISTRY
}
