use std::borrow::Cow;

use percent_encoding::AsciiSet;

/// The component percent-encode set: every character except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
///
/// This is the set applied to string values. Keys are never encoded, so the
/// querystring control characters (`&`, `=`, `?`, `#`) all get escaped here.
const COMPONENT_SET: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Variant of [`COMPONENT_SET`] with the space carved out, for form-style
/// output where spaces are written as `+` instead of `%20`.
const COMPONENT_SET_SPACE_AS_PLUS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b' ');

/// Encodes bytes for use as a querystring value, applying percent-encoding
/// as needed.
///
/// With `space_as_plus`, spaces are left out of the percent-encode set and
/// rewritten to `+` afterwards; otherwise they encode as `%20`.
///
/// The function returns an iterator to avoid allocations when no encoding is
/// needed.
pub(crate) fn encode(bytes: &[u8], space_as_plus: bool) -> impl Iterator<Item = Cow<'_, [u8]>> {
    let set = if space_as_plus {
        COMPONENT_SET_SPACE_AS_PLUS
    } else {
        COMPONENT_SET
    };
    percent_encoding::percent_encode(bytes, set).map(move |s| {
        if space_as_plus && s.as_bytes().contains(&b' ') {
            Cow::Owned(
                s.as_bytes()
                    .iter()
                    .map(|b| if *b == b' ' { b'+' } else { *b })
                    .collect(),
            )
        } else {
            Cow::Borrowed(s.as_bytes())
        }
    })
}
