//! Operating system classification.
//!
//! The host OS name is read on every call, so an override set through
//! `ASCIIFY_OS_NAME` takes effect immediately.

pub mod os;

pub use os::{PlatformType, os_name};

/// Returns the platform category of the current system
pub fn current_platform() -> PlatformType {
  PlatformType::current()
}

/// Returns `true` when running on Windows
pub fn is_windows() -> bool {
  current_platform().is_windows()
}

/// Returns `true` when running on macOS
pub fn is_mac() -> bool {
  current_platform().is_mac()
}

/// Returns `true` when running on Linux or any other unrecognized system
pub fn is_linux() -> bool {
  current_platform().is_linux()
}
