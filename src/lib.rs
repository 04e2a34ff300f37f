//! # SST Test Driver Library / SST 测试驱动库
//!
//! This library builds the SST artifact with `make` and then launches the
//! JUnit suite entry points one after another inside the JVM.
//!
//! 此库使用 `make` 构建 SST 产物，然后在 JVM 中逐个启动 JUnit 测试套件入口。
//!
//! ## Modules / 模块
//!
//! - `core` - Variants, the command plan and the sequential driver
//! - `infra` - Process spawning, file system helpers and logging setup
//! - `reporting` - Colored console output for each step
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 变体、命令计划和顺序驱动器
//! - `infra` - 进程派生、文件系统辅助函数和日志初始化
//! - `reporting` - 每个步骤的彩色控制台输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::{config, execution, models, planner};

/// Selects the display language for all console output.
///
/// An explicit `requested` language wins; otherwise the system locale is used.
/// The full locale (e.g. "zh-CN") is tried first, then the language part only
/// (e.g. "en" from "en-US"), and finally "en".
///
/// 选择所有控制台输出的显示语言。优先使用显式指定的语言，否则使用系统区域设置。
pub fn init_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let lang = resolve_locale(&locale, &rust_i18n::available_locales!());

    rust_i18n::set_locale(lang);
    lang.to_string()
}

/// Matches `locale` against `available`, falling back to the bare language
/// code and then to "en".
pub fn resolve_locale<'a>(locale: &'a str, available: &[&'a str]) -> &'a str {
    if available.contains(&locale) {
        return locale;
    }
    locale
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available.contains(lang_code))
        .unwrap_or("en")
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
