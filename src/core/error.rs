//! Typed errors raised by the driver core.

use std::io;

use thiserror::Error;

use crate::core::models::{CommandSpec, StepKind};

/// A child process could not be started or waited on.
///
/// Unlike a non-zero exit code, this stops the run: no later step is launched.
/// 子进程无法启动或等待。与非零退出码不同，这会终止整个运行。
#[derive(Debug, Error)]
#[error("failed to launch {kind} `{command}`")]
pub struct LaunchError {
    pub kind: StepKind,
    pub command: CommandSpec,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown variant '{0}' (expected one of: jar, compile, sync)")]
    UnknownVariant(String),
}
