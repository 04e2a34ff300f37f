//! # Console Reporting Module / 控制台报告模块
//!
//! Colored, localized progress lines for each step of a run.
//!
//! 运行中每个步骤的彩色本地化进度输出。

use colored::*;
use std::path::Path;

use crate::core::{
    models::{RunReport, Step, StepOutcome},
    planner::TestPlan,
};
use crate::infra::t;

/// Prints the resolved project root, configuration source and variant.
///
/// 打印解析后的项目根目录、配置来源和变体。
pub fn print_setup(project_root: &Path, config_path: Option<&Path>, plan: &TestPlan) {
    println!("{}", t!("project_root_detected", path = project_root.display()));
    match config_path {
        Some(path) => println!("{}", t!("config_loaded", path = path.display())),
        None => println!("{}", t!("config_not_found_using_defaults").dimmed()),
    }
    println!(
        "{}",
        t!(
            "variant_selected",
            variant = plan.variant,
            target = plan.variant.build_target(),
            classpath = plan.variant.classpath(),
            mode = plan.mode.description()
        )
        .cyan()
    );
}

/// Prints the command a step is about to launch.
pub fn print_step_started(step: &Step) {
    println!(
        "\n{}",
        t!(
            "step_starting",
            label = step.kind.label(),
            command = step.command.to_string()
        )
        .blue()
        .bold()
    );
}

/// Prints the exit code and duration of a finished step.
/// Green for exit code 0, red for anything else, yellow when there is no code.
///
/// 打印已完成步骤的退出码和耗时。
/// 退出码为 0 时为绿色，其他为红色，没有退出码时为黄色。
pub fn print_step_finished(outcome: &StepOutcome) {
    let label = outcome.step.kind.label();
    let duration = format!("{:.2}", outcome.duration.as_secs_f64());

    let line = match outcome.exit_code {
        Some(code) => {
            let text = t!("step_exited", label = label, code = code, duration = duration);
            if outcome.succeeded() {
                text.green()
            } else {
                text.red()
            }
        }
        None => t!("step_terminated", label = label, duration = duration).yellow(),
    };
    println!("{}", line);
}

pub fn print_artifact_missing(classpath: &str) {
    println!("{}", t!("artifact_missing", path = classpath).yellow());
}

/// Prints every planned command in launch order without running anything.
///
/// # Output Format / 输出格式
/// ```text
/// --- Planned Commands (dry run) ---
///   1. make jar
///   2. java -ea -XX:+AggressiveHeap -XX:+AllowUserSignalHandlers -Xcheck:jni -cp sst.jar shared.test.All
///   ...
/// ```
pub fn print_plan(plan: &TestPlan) {
    println!("\n{}", t!("dry_run_banner").bold());
    for (i, step) in plan.steps().enumerate() {
        println!("  {}. {}", i + 1, step.command);
    }
}

pub fn print_run_complete(report: &RunReport) {
    println!("\n{}", t!("run_complete", count = report.launches()).bold());
}
