//! Shell command execution and platform checks.

pub mod command;
pub mod platform;

pub use command::{execute, CommandResult};
pub use platform::{check_platform, is_elevated, Platform};
