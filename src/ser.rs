//! Serialization support for querystrings.

mod encode;

use std::io::Write;

use encode::encode;

use crate::config::Config;
use crate::error::Result;
use crate::value::{QueryMap, Value};

/// Serializes `params` into a query string.
///
/// The result always begins with `?`, even for an empty map.
///
/// ```
/// use typed_qs::{QueryMap, Value};
///
/// let mut params = QueryMap::new();
/// params.insert("a".to_owned(), Value::Int(1));
/// params.insert("b".to_owned(), Value::Bool(true));
///
/// assert_eq!(typed_qs::stringify(&params).unwrap(), "?a=1&b=true");
/// assert_eq!(typed_qs::stringify(&QueryMap::new()).unwrap(), "?");
/// ```
pub fn stringify(params: &QueryMap) -> Result<String> {
    Config::new().stringify(params)
}

/// Serializes `params` into a query string appended to `base_url`.
///
/// ```
/// use typed_qs::{QueryMap, Value};
///
/// let mut params = QueryMap::new();
/// params.insert("q".to_owned(), Value::String("hello world".to_owned()));
///
/// assert_eq!(
///     typed_qs::stringify_with_base(&params, "http://example.com").unwrap(),
///     "http://example.com?q=hello%20world"
/// );
/// ```
pub fn stringify_with_base(params: &QueryMap, base_url: &str) -> Result<String> {
    Config::new().stringify_with_base(params, base_url)
}

/// Serializes `params` into a generic writer object.
///
/// ```
/// use typed_qs::{QueryMap, Value};
///
/// let mut params = QueryMap::new();
/// params.insert("a".to_owned(), Value::Int(1));
///
/// let mut buffer = Vec::new();
/// typed_qs::stringify_to_writer(&params, "", &mut buffer).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "?a=1");
/// ```
pub fn stringify_to_writer<W: Write>(
    params: &QueryMap,
    base_url: &str,
    writer: &mut W,
) -> Result<()> {
    Config::new().stringify_to_writer(params, base_url, writer)
}

pub(crate) fn write_query<W: Write>(
    params: &QueryMap,
    base_url: &str,
    config: Config,
    writer: &mut W,
) -> Result<()> {
    writer.write_all(base_url.as_bytes())?;
    writer.write_all(b"?")?;

    let mut first_kv = true;
    for (key, value) in params {
        if first_kv {
            first_kv = false;
        } else {
            writer.write_all(b"&")?;
        }
        // keys are emitted as-is; only values are encoded
        writer.write_all(key.as_bytes())?;
        writer.write_all(b"=")?;
        write_value(value, config, writer)?;
    }

    Ok(())
}

fn write_value<W: Write>(value: &Value, config: Config, writer: &mut W) -> Result<()> {
    match value {
        Value::Bool(v) => {
            let text = if *v {
                b"true" as &'static [u8]
            } else {
                b"false"
            };
            writer.write_all(text)?;
        }
        Value::Int(v) => {
            let mut buffer = itoa::Buffer::new();
            writer.write_all(buffer.format(*v).as_bytes())?;
        }
        Value::Float(v) => {
            let mut buffer = ryu::Buffer::new();
            writer.write_all(buffer.format(*v).as_bytes())?;
        }
        Value::String(v) => {
            for piece in encode(v.as_bytes(), config.space_as_plus) {
                writer.write_all(&piece)?;
            }
        }
        // no better text form exists; keep the literal token
        Value::Undefined => writer.write_all(b"undefined")?,
    }
    Ok(())
}
