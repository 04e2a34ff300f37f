//! # Configuration Module / 配置模块
//!
//! The fixed command vocabulary of the driver (build tool, runtime flags,
//! suite names) and the small TOML configuration that selects a variant.
//!
//! 驱动程序的固定命令词汇（构建工具、运行时参数、测试套件名称），
//! 以及用于选择变体的小型 TOML 配置。

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::infra::t;

/// The build tool invoked before any suite runs.
pub const BUILD_TOOL: &str = "make";

/// The managed runtime that hosts the suites.
pub const RUNTIME: &str = "java";

/// Diagnostic flags passed to every runtime invocation, ahead of the classpath.
/// 传递给每次运行时调用的诊断参数，位于类路径之前。
pub const RUNTIME_FLAGS: [&str; 4] = [
    "-ea",
    "-XX:+AggressiveHeap",
    "-XX:+AllowUserSignalHandlers",
    "-Xcheck:jni",
];

/// Fully qualified suite entry points, in launch order.
/// 完全限定的测试套件入口，按启动顺序排列。
pub const TEST_SUITES: [&str; 4] = [
    "shared.test.All",
    "shared.test.Demo",
    "shared.test.AllNative",
    "sharedx.test.AllX",
];

/// File name looked up in the project directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "TestDriver.toml";

/// Contents written by `init`. Parses to `DriverConfig::default()`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Configuration for sst-test-driver.

# Output language: "en" or "zh-CN". Defaults to the system locale.
# language = "en"

# Which variant to run:
#   "jar"     - make jar,  -cp sst.jar, spawn then wait
#   "compile" - make java, -cp bin,     spawn then wait
#   "sync"    - make jar,  -cp sst.jar, blocking launches
variant = "jar"

# Directory in which make and java are launched, relative to this file.
# project_dir = "."
"#;

/// How each child process is started and awaited.
/// Both modes finish one child before the next one is started.
///
/// 每个子进程的启动和等待方式。两种模式都会在启动下一个子进程之前完成当前子进程。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchMode {
    /// Spawn the child, keep its handle, then wait on it.
    /// 派生子进程，保留句柄，然后等待它结束。
    SpawnThenWait,
    /// Run the child through a single blocking status call.
    /// 通过单个阻塞的状态调用运行子进程。
    Blocking,
}

impl LaunchMode {
    pub fn description(&self) -> String {
        match self {
            LaunchMode::SpawnThenWait => t!("launch_mode_spawn_then_wait").to_string(),
            LaunchMode::Blocking => t!("launch_mode_blocking").to_string(),
        }
    }
}

/// The three flavours of the driver script.
/// They differ only in build target, artifact path and launch mode.
///
/// 驱动脚本的三种变体，仅在构建目标、产物路径和启动方式上有所不同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// `make jar`, classpath `sst.jar`, spawn then wait.
    #[default]
    Jar,
    /// `make java`, classpath `bin`, spawn then wait.
    Compile,
    /// `make jar`, classpath `sst.jar`, blocking launches.
    Sync,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Jar, Variant::Compile, Variant::Sync];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Jar => "jar",
            Variant::Compile => "compile",
            Variant::Sync => "sync",
        }
    }

    /// The `make` target that produces this variant's artifact.
    pub fn build_target(&self) -> &'static str {
        match self {
            Variant::Jar | Variant::Sync => "jar",
            Variant::Compile => "java",
        }
    }

    /// The classpath entry the suites are loaded from, relative to the project directory.
    pub fn classpath(&self) -> &'static str {
        match self {
            Variant::Jar | Variant::Sync => "sst.jar",
            Variant::Compile => "bin",
        }
    }

    pub fn launch_mode(&self) -> LaunchMode {
        match self {
            Variant::Jar | Variant::Compile => LaunchMode::SpawnThenWait,
            Variant::Sync => LaunchMode::Blocking,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

/// The driver configuration, loaded from a TOML file.
/// Every field is optional; an empty file is a valid configuration.
///
/// 从 TOML 文件加载的驱动配置。所有字段都是可选的；空文件也是有效配置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// The language for the driver's output messages (e.g., "en", "zh-CN").
    /// When absent, the system locale applies.
    ///
    /// 驱动输出消息的语言（例如 "en", "zh-CN"）。未设置时使用系统区域设置。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Which variant to run when `--variant` is not given.
    /// 未指定 `--variant` 时运行的变体。
    #[serde(default)]
    pub variant: Variant,

    /// Directory in which `make` and `java` are launched.
    /// `~` and environment variables are expanded.
    ///
    /// 启动 `make` 和 `java` 的目录。会展开 `~` 和环境变量。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<String>,
}

impl DriverConfig {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config_read_failed_path", path = path.display()).to_string())?;
        Self::parse(&content).with_context(|| t!("config_parse_failed", path = path.display()).to_string())
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the configuration from an explicit path, or from the default file
    /// in `project_dir` when it exists. Returns the path that was actually read.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn discover(explicit: Option<&Path>, project_dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        match explicit {
            Some(path) => Ok((Self::load(path)?, Some(path.to_path_buf()))),
            None => {
                let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Ok((Self::load(&candidate)?, Some(candidate)))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }
}
