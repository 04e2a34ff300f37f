//! Command implementations behind the CLI.

pub mod init;
pub mod run;
