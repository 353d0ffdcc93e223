//! # tagwash
//!
//! Whitelist-driven HTML attribute sanitization for Rust.
//!
//! tagwash is the validation core of an HTML sanitizer: a registry of
//! typed attribute validators invoked during a single pass over parsed
//! tag attributes. Each validator decides whether a raw string is
//! acceptable, coercible to a canonical substitute, or rejected, under a
//! run-wide policy ([`Config`]) and run-scoped state ([`Context`]).
//!
//! The tokenizer that produces tags, the tree builder that reassembles
//! sanitized output and the tag-whitelist engine are separate concerns;
//! they consume this crate through the [`AttrValidator`] and
//! [`registry()`] interfaces.
//!
//! ## Quick Example
//!
//! ```
//! use tagwash::{AttrValidator, Config, Context, registry};
//!
//! let config = Config::default().with_schemes(["https"]);
//! let mut ctx = Context::new();
//!
//! let href = registry().resolve("URI").unwrap();
//! assert_eq!(
//!     href.validate("HTTPS://Example.COM/x", &config, &mut ctx).value(),
//!     Some("https://example.com/x"),
//! );
//! assert!(
//!     href.validate("javascript:alert(1)", &config, &mut ctx).is_rejected()
//! );
//! ```

pub use tagwash_attrs::{
	AttrTypeRegistry, AttrValidator, BoolValidator, ColorValidator, Config, Context,
	EmailValidator, EnumValidator, IdValidator, IntegerValidator, LangValidator, LengthValidator,
	Mailbox, MultiLengthValidator, NmtokensValidator, PixelsValidator, RegistryError,
	TextValidator, UriValidator, ValidResult, cdata, registry,
};

/// URI parsing and percent-encoding utilities.
pub use tagwash_uri as uri;

/// Re-export of commonly used types
pub mod prelude {
	pub use tagwash_attrs::prelude::*;
	pub use tagwash_uri::{Uri, UriParseError};
}
