use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::consts::OS_NAME_ENV;

/// Operating system families recognized by asciify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformType {
  Windows,
  Mac,
  Linux,
}

impl PlatformType {
  /// Classify an operating system name.
  ///
  /// Matching is case-insensitive and checked in order: a name containing
  /// `win` is Windows, one containing `mac` or `osx` is Mac, and anything
  /// else falls back to Linux.
  pub fn from_os_name(name: &str) -> Self {
    let name = name.to_lowercase();
    if name.contains("win") {
      Self::Windows
    } else if name.contains("mac") || name.contains("osx") {
      Self::Mac
    } else {
      Self::Linux
    }
  }

  /// Detect the current platform from [`os_name`]
  pub fn current() -> Self {
    let name = os_name();
    let platform = Self::from_os_name(&name);
    debug!(os_name = %name, platform = %platform, "classified platform");
    platform
  }

  /// Returns the lowercase string identifier for this platform
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::Mac => "mac",
      Self::Linux => "linux",
    }
  }

  pub fn is_windows(&self) -> bool {
    *self == Self::Windows
  }

  pub fn is_mac(&self) -> bool {
    *self == Self::Mac
  }

  pub fn is_linux(&self) -> bool {
    *self == Self::Linux
  }
}

impl fmt::Display for PlatformType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Returns the operating system name used for classification.
///
/// `ASCIIFY_OS_NAME` takes precedence when set to a non-empty value,
/// otherwise this is the target OS the binary was built for.
pub fn os_name() -> String {
  match std::env::var(OS_NAME_ENV) {
    Ok(name) if !name.trim().is_empty() => name,
    _ => std::env::consts::OS.to_string(),
  }
}
