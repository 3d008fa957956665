/// Environment variable that overrides the detected operating system name.
pub const OS_NAME_ENV: &str = "ASCIIFY_OS_NAME";

/// Prefix that introduces an escape token.
pub const ESCAPE_PREFIX: &str = "\\u";

/// Highest code unit that is emitted verbatim by the encoder.
pub const MAX_VERBATIM_UNIT: u16 = 0x7f;

/// Replacement for code units that do not survive UTF-8 normalization.
pub const REPLACEMENT_CHAR: char = '?';
