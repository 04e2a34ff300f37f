//! # Process Module / 进程模块
//!
//! Spawns child processes for plan steps and waits for them to exit.
//! Child stdout and stderr are inherited, so the build tool and the suites
//! write straight to the driver's console.
//!
//! 为计划步骤派生子进程并等待其退出。子进程继承标准输出和标准错误，
//! 因此构建工具和测试套件直接写入驱动程序的控制台。

use std::io;
use std::path::Path;
use std::process::ExitStatus;

use crate::core::{models::CommandSpec, LaunchMode};

/// Builds a `std::process::Command` for `spec`, rooted at `working_dir`.
pub fn to_std_command(spec: &CommandSpec, working_dir: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(&spec.program);
    cmd.args(&spec.args).current_dir(working_dir);
    cmd
}

/// Spawns a command, then waits on the child handle until it exits.
///
/// 派生一个命令，然后在子进程句柄上等待直到其退出。
pub async fn spawn_and_wait(mut cmd: tokio::process::Command) -> io::Result<ExitStatus> {
    let mut child = cmd.kill_on_drop(true).spawn()?;
    child.wait().await
}

/// Runs a command with a synchronous `status()` call on the blocking pool.
///
/// 在阻塞线程池上通过同步的 `status()` 调用运行命令。
pub async fn run_blocking(mut cmd: std::process::Command) -> io::Result<ExitStatus> {
    tokio::task::spawn_blocking(move || cmd.status())
        .await
        .map_err(io::Error::other)?
}

/// Launches `spec` in `working_dir` and returns once the child has exited.
pub async fn launch(spec: &CommandSpec, working_dir: &Path, mode: LaunchMode) -> io::Result<ExitStatus> {
    let cmd = to_std_command(spec, working_dir);
    match mode {
        LaunchMode::SpawnThenWait => spawn_and_wait(tokio::process::Command::from(cmd)).await,
        LaunchMode::Blocking => run_blocking(cmd).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_command_carries_program_args_and_dir() {
        let spec = CommandSpec::new("java").args(["-ea", "-cp", "sst.jar", "shared.test.All"]);
        let cmd = to_std_command(&spec, Path::new("/tmp"));

        assert_eq!(cmd.get_program(), "java");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["-ea", "-cp", "sst.jar", "shared.test.All"]);
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/tmp")));
    }

    #[tokio::test]
    async fn test_launch_reports_missing_program_as_error() {
        let spec = CommandSpec::new("this_program_definitely_does_not_exist_12345");
        for mode in [LaunchMode::SpawnThenWait, LaunchMode::Blocking] {
            let err = launch(&spec, Path::new("."), mode).await.unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::NotFound);
        }
    }
}
