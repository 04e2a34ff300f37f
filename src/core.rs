//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the test driver,
//! including variants, data models, planning, and sequential execution.
//!
//! 此模块包含测试驱动的核心功能，
//! 包括变体、数据模型、计划和顺序执行。

pub mod config;
pub mod error;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::{DriverConfig, LaunchMode, Variant};
pub use error::{ConfigError, LaunchError};
pub use execution::{run_plan, Launcher, ProcessLauncher};
pub use models::{CommandSpec, RunReport, Step, StepKind, StepOutcome};
pub use planner::{plan_execution, TestPlan};
