mod codec;
mod convert;
mod demo;
mod platform;

pub use codec::{cmd_decode, cmd_encode};
pub use convert::cmd_convert;
pub use demo::cmd_demo;
pub use platform::cmd_platform;
