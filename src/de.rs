//! Parsing support for querystrings.

mod decode;
mod infer;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::value::{QueryMap, Value};

/// Parses the query parameters of `url` into a [`QueryMap`].
///
/// The query segment is the text between the first and second `?` when that
/// text is non-empty; otherwise the text before the first `?` is parsed in
/// its place, so an input with no `?` at all is parsed whole. This fallback
/// is deliberate and kept for compatibility.
///
/// ```
/// use typed_qs::Value;
///
/// let params = typed_qs::parse("foo?a=1&b=true&c=hello").unwrap();
/// assert_eq!(params["a"], Value::Int(1));
/// assert_eq!(params["b"], Value::Bool(true));
/// assert_eq!(params["c"], Value::String("hello".to_owned()));
/// ```
///
/// Note the falsy collapse documented at the crate level: with the default
/// [`Config`], `parse("a=0")` yields [`Value::Undefined`], not `Int(0)`.
pub fn parse(url: &str) -> Result<QueryMap> {
    Config::new().parse_str(url)
}

pub(crate) fn parse_with(url: &str, config: Config) -> Result<QueryMap> {
    let query = locate_query(url);
    let mut params = QueryMap::default();

    let mut offset = 0;
    for pair in query.split('&') {
        // only the first two `=`-delimited segments are used; any further
        // ones are silently dropped
        let mut segments = pair.split('=');
        let key = segments.next().unwrap_or_default();
        let raw_value = segments.next();

        let inferred = infer::infer(raw_value, config)
            .map_err(|err| Error::parse_err(format_args!("invalid utf-8 in value: {err}"), offset))?;
        let value = if config.collapse_falsy && inferred.is_falsy() {
            Value::Undefined
        } else {
            inferred
        };

        #[cfg(feature = "debug_parsed")]
        tracing::debug!(key, value = ?value, "parsed pair");

        // a repeated key overwrites the earlier value but keeps its position
        params.insert(key.to_owned(), value);
        offset += pair.len() + 1;
    }

    Ok(params)
}

/// Picks the segment of `url` to parse: the text between the first and
/// second `?` when non-empty, else the text before the first `?`.
fn locate_query(url: &str) -> &str {
    let mut segments = url.split('?');
    let before = segments.next().unwrap_or_default();
    match segments.next() {
        Some(query) if !query.is_empty() => query,
        _ => before,
    }
}
