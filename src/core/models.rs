//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures that flow through the driver:
//! command specifications, plan steps, and the recorded outcome of each step.
//!
//! 此模块定义了在驱动程序中流转的数据结构：
//! 命令规格、计划步骤以及每个步骤的执行结果记录。

use std::fmt;
use std::process::ExitCode;
use std::time::Duration;

use crate::infra::t;

/// A program name plus its argument list.
/// 程序名称及其参数列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Renders the command as a single shell-quoted line.
    /// 将命令渲染为一行经过 shell 引用的文本。
    pub fn to_command_line(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        // try_join only fails on interior NUL bytes
        shlex::try_join(words.clone()).unwrap_or_else(|_| words.collect::<Vec<_>>().join(" "))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_command_line())
    }
}

/// What a step is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    /// The `make` invocation that produces the artifact.
    /// 生成产物的 `make` 调用。
    Build,
    /// A suite entry point run inside the JVM, by fully qualified name.
    /// 在 JVM 中按完全限定名运行的测试套件入口。
    Suite(String),
}

impl StepKind {
    /// Localized label used in console output.
    pub fn label(&self) -> String {
        match self {
            StepKind::Build => t!("build_label").to_string(),
            StepKind::Suite(name) => t!("suite_label", name = name).to_string(),
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Build => f.write_str("build step"),
            StepKind::Suite(name) => write!(f, "suite {name}"),
        }
    }
}

/// One entry of the plan: a command and the role it plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub command: CommandSpec,
}

impl Step {
    pub fn build(command: CommandSpec) -> Self {
        Self {
            kind: StepKind::Build,
            command,
        }
    }

    pub fn suite(name: impl Into<String>, command: CommandSpec) -> Self {
        Self {
            kind: StepKind::Suite(name.into()),
            command,
        }
    }

    pub fn is_build(&self) -> bool {
        matches!(self.kind, StepKind::Build)
    }
}

/// The recorded result of a step whose process was launched and awaited.
///
/// `exit_code` is `None` when the process ended without one (e.g. killed by a signal).
/// 已启动并等待结束的步骤的结果记录。进程没有退出码（例如被信号终止）时 `exit_code` 为 `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Every launched step, in launch order.
/// 所有已启动的步骤，按启动顺序排列。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<StepOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of processes launched.
    pub fn launches(&self) -> usize {
        self.outcomes.len()
    }

    pub fn build_outcome(&self) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.step.is_build())
    }

    /// Suite names in the order they were launched.
    pub fn suite_order(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.step.kind {
                StepKind::Suite(name) => Some(name.as_str()),
                StepKind::Build => None,
            })
            .collect()
    }

    /// The exit code the driver reports to its caller.
    ///
    /// Child exit codes are not folded in; a completed run always reports
    /// success, whatever the build and suites returned.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::SUCCESS
    }
}
