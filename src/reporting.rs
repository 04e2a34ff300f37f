//! # Reporting Module / 报告模块
//!
//! This module prints the driver's progress to the console: the resolved
//! setup, each step as it starts and exits, and the dry-run plan.
//! It reports only; child output is never parsed or summarized.
//!
//! 此模块将驱动程序的进度打印到控制台：解析后的设置、每个步骤的开始与退出，
//! 以及试运行计划。它只负责报告，从不解析或汇总子进程输出。

pub mod console;

// Re-export common reporting functions
pub use console::{
    print_artifact_missing, print_plan, print_run_complete, print_setup, print_step_finished,
    print_step_started,
};
