//! Library half of the `cw` binary
//!
//! Split out so the console and configuration code can be unit tested
//! without spawning the binary.

pub mod interactive;
pub mod logging;
pub mod system_config;
