// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use tempfile::{tempdir, TempDir};

/// Records every invocation to `$SST_FAKE_LOG` and exits with `$SST_FAKE_MAKE_EXIT`.
/// Produces the artifact the real Makefile would, unless `$SST_FAKE_SKIP_ARTIFACT` is set.
const FAKE_MAKE: &str = r#"#!/bin/sh
echo "make $*" >> "$SST_FAKE_LOG"
if [ -z "$SST_FAKE_SKIP_ARTIFACT" ]; then
    if [ "$1" = "jar" ]; then : > sst.jar; fi
    if [ "$1" = "java" ]; then mkdir -p bin; fi
fi
exit "${SST_FAKE_MAKE_EXIT:-0}"
"#;

/// Records every invocation and fails when the suite equals `$SST_FAKE_FAILING_SUITE`.
const FAKE_JAVA: &str = r#"#!/bin/sh
echo "java $*" >> "$SST_FAKE_LOG"
for last in "$@"; do :; done
if [ "$last" = "$SST_FAKE_FAILING_SUITE" ]; then
    echo "FAILURES!!! ($last)"
    exit 1
fi
echo "OK ($last)"
"#;

pub const JAVA_PREFIX: &str = "java -ea -XX:+AggressiveHeap -XX:+AllowUserSignalHandlers -Xcheck:jni";

/// A temporary project directory plus a `bin/` of fake `make` and `java` scripts.
pub struct FakeToolchain {
    _root: TempDir,
    pub bin: PathBuf,
    pub project: PathBuf,
    pub log: PathBuf,
}

impl FakeToolchain {
    pub fn new() -> Self {
        let root = tempdir().expect("Failed to create temporary directory");
        let bin = root.path().join("fake-bin");
        let project = root.path().join("project");
        fs::create_dir_all(&bin).expect("Failed to create fake bin directory");
        fs::create_dir_all(&project).expect("Failed to create project directory");

        write_script(&bin.join("make"), FAKE_MAKE);
        write_script(&bin.join("java"), FAKE_JAVA);

        let log = root.path().join("invocations.log");
        Self {
            _root: root,
            bin,
            project,
            log,
        }
    }

    pub fn remove_tool(&self, name: &str) {
        fs::remove_file(self.bin.join(name)).expect("Failed to remove fake tool");
    }

    /// The driver binary with the fake tools first on `PATH`, English output,
    /// and `--project-dir` pointing at the temporary project.
    pub fn driver(&self) -> Command {
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.bin.clone()];
                paths.extend(std::env::split_paths(&existing));
                std::env::join_paths(paths).expect("Failed to join PATH")
            }
            None => self.bin.clone().into_os_string(),
        };
        let mut cmd = self.driver_with_path(path);
        cmd.env_remove("SST_FAKE_MAKE_EXIT")
            .env_remove("SST_FAKE_FAILING_SUITE")
            .env_remove("SST_FAKE_SKIP_ARTIFACT");
        cmd
    }

    /// Like `driver`, but `PATH` holds the fake tools and nothing else.
    pub fn isolated_driver(&self) -> Command {
        self.driver_with_path(self.bin.clone().into_os_string())
    }

    fn driver_with_path(&self, path: std::ffi::OsString) -> Command {
        let mut cmd = self.driver_without_lang(path);
        cmd.arg("--lang").arg("en");
        cmd
    }

    /// The driver with no `--lang`, running under the given system locale
    /// (e.g. "zh_CN.UTF-8"). Only the fake tools are on `PATH`.
    pub fn driver_with_system_locale(&self, locale: &str) -> Command {
        let mut cmd = self.driver_without_lang(self.bin.clone().into_os_string());
        cmd.env("LC_ALL", locale)
            .env("LANG", locale)
            .env_remove("LC_MESSAGES")
            .env_remove("LANGUAGE");
        cmd
    }

    fn driver_without_lang(&self, path: std::ffi::OsString) -> Command {
        let mut cmd = Command::cargo_bin("sst-test-driver").unwrap();
        cmd.env("PATH", path)
            .env("SST_FAKE_LOG", &self.log)
            .env_remove("RUST_LOG")
            .arg("--project-dir")
            .arg(&self.project);
        cmd
    }

    /// Invocations recorded by the fake tools, one per line, in order.
    pub fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.project.join("TestDriver.toml");
        fs::write(&path, content).expect("Failed to write TestDriver.toml");
        path
    }
}

fn write_script(path: &Path, content: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, content).expect("Failed to write fake tool");
    let mut perms = fs::metadata(path).expect("Failed to stat fake tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to make fake tool executable");
}

/// The five invocations a full run of `classpath` performs, in order.
pub fn expected_invocations(target: &str, classpath: &str) -> Vec<String> {
    let mut expected = vec![format!("make {target}")];
    for suite in [
        "shared.test.All",
        "shared.test.Demo",
        "shared.test.AllNative",
        "sharedx.test.AllX",
    ] {
        expected.push(format!("{JAVA_PREFIX} -cp {classpath} {suite}"));
    }
    expected
}
