//! The `\uXXXX` escape token: pattern, parsing and formatting.

use std::sync::OnceLock;

use regex::Regex;

use crate::consts::ESCAPE_PREFIX;

/// Literal `\u` followed by exactly four hex digits, captured as group 1.
const TOKEN_PATTERN: &str = r"\\u([0-9a-fA-F]{4})";

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Returns the compiled token pattern, building it on first use.
pub(crate) fn pattern() -> &'static Regex {
  TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("Invalid escape token regex"))
}

/// Parse the four hex digits of a token into a UTF-16 code unit.
pub(crate) fn parse_unit(hex: &str) -> Option<u16> {
  u16::from_str_radix(hex, 16).ok()
}

/// Append the token for `unit` to `out`, using lowercase zero-padded hex.
pub(crate) fn push_token(out: &mut String, unit: u16) {
  out.push_str(ESCAPE_PREFIX);
  out.push_str(&format!("{:04x}", unit));
}
