//! asciify-lib: text escaping and platform helpers
//!
//! This crate provides:
//! - `escape`: conversion between native text and `\uXXXX` escaped ASCII
//! - `platform`: classification of the host OS as Windows, Mac or Linux
//! - `convert`: applying the escape codec to whole files

pub mod consts;
pub mod convert;
pub mod escape;
pub mod platform;
