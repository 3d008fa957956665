//! Whole-file conversion.
//!
//! Applies [`encode`](crate::escape::encode) or [`decode`](crate::escape::decode)
//! to a UTF-8 file and writes the result either to a separate path or back
//! over the source. Writes go through a uniquely named temporary file that
//! is persisted into place, so a failed write leaves the destination untouched.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::escape::{decode, encode};

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  /// Native text to `\uXXXX` escaped ASCII.
  Encode,
  /// `\uXXXX` escaped ASCII to native text.
  Decode,
}

impl Direction {
  /// Run the codec on `text`. `escape_all` only affects [`Direction::Encode`].
  pub fn apply<'a>(&self, text: &'a str, escape_all: bool) -> Cow<'a, str> {
    match self {
      Self::Encode => encode(text, escape_all),
      Self::Decode => decode(text),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Encode => "encode",
      Self::Decode => "decode",
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Outcome of a single [`convert_file`] call.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
  pub input: PathBuf,
  pub output: PathBuf,
  pub direction: Direction,
  /// `false` when the destination already held the converted content.
  pub changed: bool,
  pub bytes_in: usize,
  pub bytes_out: usize,
}

/// Error during file conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
  #[error("input file not found: {path}")]
  NotFound { path: String },

  #[error("failed to read {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error("{path} is not valid UTF-8: {source}")]
  InvalidUtf8 {
    path: String,
    #[source]
    source: std::string::FromUtf8Error,
  },

  #[error("failed to write {path}: {source}")]
  Write {
    path: String,
    #[source]
    source: io::Error,
  },
}

/// Convert the file at `input`.
///
/// The result is written to `output`, or back to `input` when `output` is
/// `None`. Nothing is written when the destination already contains the
/// converted text.
pub fn convert_file(
  input: &Path,
  output: Option<&Path>,
  direction: Direction,
  escape_all: bool,
) -> Result<ConvertReport, ConvertError> {
  if !input.exists() {
    return Err(ConvertError::NotFound {
      path: input.display().to_string(),
    });
  }

  let bytes = fs::read(input).map_err(|source| ConvertError::Read {
    path: input.display().to_string(),
    source,
  })?;
  let bytes_in = bytes.len();
  let text = String::from_utf8(bytes).map_err(|source| ConvertError::InvalidUtf8 {
    path: input.display().to_string(),
    source,
  })?;

  let converted = direction.apply(&text, escape_all);
  let dest = output.unwrap_or(input);

  let unchanged = if dest == input {
    *converted == *text
  } else {
    fs::read_to_string(dest).is_ok_and(|existing| existing.as_str() == &*converted)
  };

  if unchanged {
    debug!(path = %dest.display(), direction = %direction, "destination already up to date");
  } else {
    write_atomic(dest, converted.as_bytes())?;
  }

  info!(
    input = %input.display(),
    output = %dest.display(),
    direction = %direction,
    changed = !unchanged,
    "converted file"
  );

  Ok(ConvertReport {
    input: input.to_path_buf(),
    output: dest.to_path_buf(),
    direction,
    changed: !unchanged,
    bytes_in,
    bytes_out: converted.len(),
  })
}

/// Write `content` to `path` via a uniquely named temporary file in the same
/// directory, then persist it over `path`.
///
/// An existing destination keeps its permissions. The temporary file is
/// removed if any step fails.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ConvertError> {
  let write_err = |source| ConvertError::Write {
    path: path.display().to_string(),
    source,
  };

  let parent = match path.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir,
    _ => Path::new("."),
  };

  let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
  temp.write_all(content).map_err(write_err)?;

  if let Ok(metadata) = fs::metadata(path) {
    temp
      .as_file()
      .set_permissions(metadata.permissions())
      .map_err(write_err)?;
  }

  temp.persist(path).map_err(|e| write_err(e.error))?;

  Ok(())
}
