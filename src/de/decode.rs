use std::borrow::Cow;
use std::str::Utf8Error;

/// Percent-decodes a raw string value.
///
/// Malformed `%XX` sequences pass through literally; only the UTF-8
/// validity of the decoded bytes is enforced. With `plus_as_space`, a
/// literal `+` decodes to a space before percent-decoding, so an encoded
/// `%2B` still yields a literal `+`.
pub(crate) fn decode(raw: &str, plus_as_space: bool) -> Result<String, Utf8Error> {
    let replaced: Cow<'_, str> = if plus_as_space && raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    let decoded = percent_encoding::percent_decode_str(&replaced).decode_utf8()?;
    Ok(decoded.into_owned())
}
