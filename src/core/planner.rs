//! # Execution Planning Module / 执行计划模块
//!
//! Turns a variant into the ordered list of commands the driver launches:
//! one build step followed by one runtime invocation per suite.
//!
//! 将变体转换为驱动程序要启动的有序命令列表：
//! 一个构建步骤，随后每个测试套件一次运行时调用。

use crate::core::{
    config::{Variant, BUILD_TOOL, RUNTIME, RUNTIME_FLAGS, TEST_SUITES},
    models::{CommandSpec, Step},
    LaunchMode,
};

/// The full, ordered set of steps for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPlan {
    pub variant: Variant,
    pub mode: LaunchMode,
    pub build: Step,
    pub suites: Vec<Step>,
}

impl TestPlan {
    /// All steps in launch order: the build first, then each suite.
    /// 按启动顺序排列的所有步骤：先构建，然后是每个测试套件。
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        std::iter::once(&self.build).chain(self.suites.iter())
    }
}

/// `make <target>` for the given variant.
pub fn build_command(variant: Variant) -> CommandSpec {
    CommandSpec::new(BUILD_TOOL).arg(variant.build_target())
}

/// The runtime invocation shared by every suite: flags, then the classpath.
/// 所有测试套件共享的运行时调用：先是诊断参数，然后是类路径。
pub fn base_runtime_command(variant: Variant) -> CommandSpec {
    CommandSpec::new(RUNTIME)
        .args(RUNTIME_FLAGS)
        .arg("-cp")
        .arg(variant.classpath())
}

/// Builds the plan for `variant`.
pub fn plan_execution(variant: Variant) -> TestPlan {
    let base = base_runtime_command(variant);
    let suites = TEST_SUITES
        .iter()
        .map(|&suite| Step::suite(suite, base.clone().arg(suite)))
        .collect();

    TestPlan {
        variant,
        mode: variant.launch_mode(),
        build: Step::build(build_command(variant)),
        suites,
    }
}
