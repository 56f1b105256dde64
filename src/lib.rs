//! Typed query-string parsing and stringification.
//!
//! Query strings carry plain text, but the values inside them usually are
//! not: `?page=2&exact=true&q=hello` holds a number, a boolean and a string.
//! This library converts between query strings and an insertion-ordered map
//! of [`Value`]s, inferring each value's type from its raw text alone.
//!
//! ## Type inference
//!
//! Inference is purely lexical and runs in a fixed order: text that is
//! exactly `true` or `false` becomes a boolean; text that passes the loose
//! numeric test becomes a number (a float when the text contains a `.`, an
//! integer otherwise); anything else is percent-decoded and kept as a
//! string. A key with no value at all maps to [`Value::Undefined`].
//!
//! ## Known limitation: the falsy collapse
//!
//! For compatibility, any parsed value that is falsy in a boolean-coercion
//! sense -- `false`, `0`, `0.0` -- collapses to [`Value::Undefined`] by
//! default, making it indistinguishable from a missing value. Use
//! [`Config::collapse_falsy`] to opt out.
//!
//! ```
//! use typed_qs::{Config, Value};
//!
//! let params = typed_qs::parse("a=0&b=false").unwrap();
//! assert_eq!(params["a"], Value::Undefined);
//! assert_eq!(params["b"], Value::Undefined);
//!
//! let params = Config::new()
//!     .collapse_falsy(false)
//!     .parse_str("a=0&b=false")
//!     .unwrap();
//! assert_eq!(params["a"], Value::Int(0));
//! assert_eq!(params["b"], Value::Bool(false));
//! ```
//!
//! ## Usage
//!
//! ```
//! use typed_qs::Value;
//!
//! # fn main() -> typed_qs::Result<()> {
//! let params = typed_qs::parse("https://example.com/search?page=2&exact=true&q=hello")?;
//! assert_eq!(params["page"], Value::Int(2));
//! assert_eq!(params["exact"], Value::Bool(true));
//! assert_eq!(params["q"], Value::String("hello".to_owned()));
//!
//! let url = typed_qs::stringify_with_base(&params, "https://example.com/search")?;
//! assert_eq!(url, "https://example.com/search?page=2&exact=true&q=hello");
//! # Ok(())
//! # }
//! ```

mod config;
mod de;
mod error;
mod ser;
mod value;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use de::parse;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use ser::{stringify, stringify_to_writer, stringify_with_base};
#[doc(inline)]
pub use value::{QueryMap, Value};
