use std::io::Write;

use crate::error::Result;
use crate::value::QueryMap;

/// Configuration for parsing and stringification behavior.
///
/// ## Falsy collapse
///
/// The `collapse_falsy` parameter controls the compatibility behavior where
/// any falsy parsed value (`false`, `0`, `0.0`) is replaced by
/// [`Value::Undefined`](crate::Value::Undefined), making it
/// indistinguishable from a missing value. It is on by default; turning it
/// off keeps legitimate `false` and `0` parameters. A key with a missing
/// value parses to `Undefined` under either setting.
///
/// Default value: `collapse_falsy = true`
///
/// ```
/// use typed_qs::{Config, Value};
///
/// let config = Config { collapse_falsy: false, ..Default::default() };
/// let params = config.parse_str("a=0").unwrap();
/// assert_eq!(params["a"], Value::Int(0));
/// ```
///
/// ## Space handling
///
/// By default, spaces in string values are percent-encoded as `%20` when
/// stringifying, and a literal `+` decodes to itself when parsing. With
/// `space_as_plus`, spaces are written as `+` and `+` decodes to a space,
/// matching form-style query strings. A percent-encoded `%2B` decodes to a
/// literal `+` under either setting.
///
/// Default value: `space_as_plus = false`
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub collapse_falsy: bool,
    pub space_as_plus: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            collapse_falsy: true,
            space_as_plus: false,
        }
    }

    /// Specifies whether falsy parsed values collapse to
    /// [`Value::Undefined`](crate::Value::Undefined). Default is `true`.
    pub const fn collapse_falsy(mut self, collapse_falsy: bool) -> Self {
        self.collapse_falsy = collapse_falsy;
        self
    }

    /// Specifies whether a space is written as `+` and `+` is decoded to a
    /// space. Default is `false`.
    pub const fn space_as_plus(mut self, space_as_plus: bool) -> Self {
        self.space_as_plus = space_as_plus;
        self
    }

    /// Parses query parameters out of `input` using this `Config`.
    pub fn parse_str(self, input: &str) -> Result<QueryMap> {
        crate::de::parse_with(input, self)
    }

    /// Serializes `params` to a query string using this `Config`.
    pub fn stringify(self, params: &QueryMap) -> Result<String> {
        self.stringify_with_base(params, "")
    }

    /// Serializes `params` to a query string appended to `base_url` using
    /// this `Config`.
    pub fn stringify_with_base(self, params: &QueryMap, base_url: &str) -> Result<String> {
        // initialize the buffer with 128 bytes
        // this is a guess based on what `serde_json` does
        let mut buffer = Vec::with_capacity(128);
        self.stringify_to_writer(params, base_url, &mut buffer)?;
        String::from_utf8(buffer).map_err(crate::Error::from)
    }

    /// Serializes `params` into a writer using this `Config`.
    pub fn stringify_to_writer<W: Write>(
        self,
        params: &QueryMap,
        base_url: &str,
        writer: &mut W,
    ) -> Result<()> {
        crate::ser::write_query(params, base_url, self, writer)
    }
}
