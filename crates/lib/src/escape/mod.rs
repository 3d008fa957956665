//! Conversion between native text and `\uXXXX` escaped ASCII.
//!
//! Escaping works on UTF-16 code units: every unit above `0x7f` becomes a
//! six character token such as `\u0442`, and decoding maps each token back
//! to its unit. Characters outside the basic plane are therefore written as
//! two tokens, one per surrogate half, and decoding rejoins adjacent halves.
//!
//! Both directions return [`Cow::Borrowed`] when the input needs no work.

mod token;

use std::borrow::Cow;

use crate::consts::{MAX_VERBATIM_UNIT, REPLACEMENT_CHAR};

/// Escape `text` into pure ASCII.
///
/// With `escape_all` every code unit is escaped, including plain ASCII.
/// Empty input is returned as is.
///
/// # Examples
///
/// ```
/// use asciify_lib::escape::encode;
///
/// assert_eq!(encode("123 test тест", false), "123 test \\u0442\\u0435\\u0441\\u0442");
/// assert_eq!(encode("ABC", true), "\\u0041\\u0042\\u0043");
/// ```
pub fn encode(text: &str, escape_all: bool) -> Cow<'_, str> {
  if text.is_empty() || (!escape_all && !needs_escaping(text)) {
    return Cow::Borrowed(text);
  }

  let mut out = String::with_capacity(text.len() * 2);
  for unit in text.encode_utf16() {
    if escape_all || unit > MAX_VERBATIM_UNIT {
      token::push_token(&mut out, unit);
    } else {
      // Units up to 0x7f are ASCII and map to a single char.
      out.push(char::from(unit as u8));
    }
  }

  Cow::Owned(out)
}

/// [`encode`] over an optional value. `None` stays `None`.
pub fn encode_opt(text: Option<&str>, escape_all: bool) -> Option<Cow<'_, str>> {
  text.map(|t| encode(t, escape_all))
}

/// Replace every `\uXXXX` token in `text` with the code unit it names.
///
/// Text around the tokens is kept verbatim, and anything that only looks
/// like a token (`\u12`, `\u12G4`) is left alone. A surrogate half that is
/// not part of a valid pair cannot be represented in UTF-8 and comes out
/// as `?`.
///
/// # Examples
///
/// ```
/// use asciify_lib::escape::decode;
///
/// assert_eq!(decode("123 test \\u0442\\u0435\\u0441\\u0442"), "123 test тест");
/// assert_eq!(decode("no tokens here"), "no tokens here");
/// ```
pub fn decode(text: &str) -> Cow<'_, str> {
  if text.is_empty() {
    return Cow::Borrowed(text);
  }

  let mut units: Vec<u16> = Vec::with_capacity(text.len());
  let mut last = 0;
  let mut matched = false;

  for caps in token::pattern().captures_iter(text) {
    let (Some(whole), Some(hex)) = (caps.get(0), caps.get(1)) else {
      continue;
    };
    let Some(unit) = token::parse_unit(hex.as_str()) else {
      continue;
    };

    units.extend(text[last..whole.start()].encode_utf16());
    units.push(unit);
    last = whole.end();
    matched = true;
  }

  if !matched {
    return Cow::Borrowed(text);
  }

  units.extend(text[last..].encode_utf16());
  Cow::Owned(normalize_units(&units))
}

/// [`decode`] over an optional value. `None` stays `None`.
pub fn decode_opt(text: Option<&str>) -> Option<Cow<'_, str>> {
  text.map(decode)
}

/// Returns `true` if `text` contains at least one escape token.
pub fn contains_escapes(text: &str) -> bool {
  token::pattern().is_match(text)
}

/// Returns `true` if `text` has any code unit that [`encode`] would escape
/// in its default mode.
pub fn needs_escaping(text: &str) -> bool {
  !text.is_ascii()
}

/// Turn decoded code units into a UTF-8 string.
fn normalize_units(units: &[u16]) -> String {
  char::decode_utf16(units.iter().copied())
    .map(|r| r.unwrap_or(REPLACEMENT_CHAR))
    .collect()
}
