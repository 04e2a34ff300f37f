//! # Test Driver Execution Module / 测试驱动执行模块
//!
//! Runs a [`TestPlan`] one step at a time: the build first, then every suite
//! in order. Each child is awaited before the next one is launched.
//!
//! A non-zero exit code is recorded and reported but never stops the run.
//! A launch failure stops it immediately.
//!
//! 逐步运行 [`TestPlan`]：先构建，然后按顺序运行每个测试套件。
//! 每个子进程在下一个子进程启动之前都会被等待结束。
//! 非零退出码会被记录和报告，但不会中止运行；启动失败则会立即中止。

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::{
    core::{
        error::LaunchError,
        models::{RunReport, Step, StepOutcome},
        planner::TestPlan,
        LaunchMode,
    },
    infra::{command, fs},
    reporting::console,
};

/// Starts the process for a step and resolves once it has exited.
///
/// Resolves to the child's exit code, or `None` if it ended without one.
/// An `Err` means the process could not be started or waited on.
///
/// 启动某个步骤的进程，并在其退出后完成。
/// 结果为子进程的退出码；如果进程没有退出码则为 `None`。
/// `Err` 表示进程无法启动或无法等待。
pub trait Launcher {
    fn launch(&self, step: &Step, mode: LaunchMode) -> impl Future<Output = io::Result<Option<i32>>> + Send;
}

/// Launches real child processes in a fixed working directory.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    working_dir: PathBuf,
}

impl ProcessLauncher {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl Launcher for ProcessLauncher {
    async fn launch(&self, step: &Step, mode: LaunchMode) -> io::Result<Option<i32>> {
        tracing::debug!(
            command = %step.command,
            cwd = %self.working_dir.display(),
            ?mode,
            "spawning child process"
        );
        let status = command::launch(&step.command, &self.working_dir, mode).await?;
        Ok(status.code())
    }
}

/// The main entry point for a run.
///
/// # Arguments
/// * `plan` - The ordered steps to launch
/// * `launcher` - Starts and awaits each step's process
/// * `project_dir` - Directory checked for the build artifact after the build step
///
/// # Returns
/// A `RunReport` with one outcome per step, in launch order, or the
/// `LaunchError` of the first step that could not be launched
pub async fn run_plan<L: Launcher>(
    plan: &TestPlan,
    launcher: &L,
    project_dir: &Path,
) -> Result<RunReport, LaunchError> {
    let mut report = RunReport::default();

    for step in plan.steps() {
        console::print_step_started(step);

        let start_time = Instant::now();
        let exit_code = launcher
            .launch(step, plan.mode)
            .await
            .map_err(|source| {
                tracing::error!(command = %step.command, error = %source, "launch failed");
                LaunchError {
                    kind: step.kind.clone(),
                    command: step.command.clone(),
                    source,
                }
            })?;
        let outcome = StepOutcome {
            step: step.clone(),
            exit_code,
            duration: start_time.elapsed(),
        };

        tracing::info!(
            step = %outcome.step.kind,
            exit_code = ?outcome.exit_code,
            duration_ms = outcome.duration.as_millis() as u64,
            "child process exited"
        );
        console::print_step_finished(&outcome);

        if step.is_build() {
            let classpath = plan.variant.classpath();
            if !fs::artifact_exists(project_dir, classpath) {
                tracing::warn!(artifact = classpath, "build artifact missing");
                console::print_artifact_missing(classpath);
            }
        }

        report.push(outcome);
    }

    Ok(report)
}
