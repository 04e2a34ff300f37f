//! # File System Operations Module / 文件系统操作模块
//!
//! Helpers for locating the project directory, checking for the build
//! artifact, and writing the default configuration file.
//!
//! 用于定位项目目录、检查构建产物以及写入默认配置文件的辅助函数。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Expands `~` and environment variables in `raw`, then canonicalizes it.
///
/// # Arguments
/// * `raw` - Directory path as written by the user or the config file
/// * `base` - Directory that a relative `raw` is resolved against
///
/// # Returns
/// The absolute path, or an error if it cannot be expanded or is not a directory
pub fn resolve_project_dir(raw: &str, base: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| t!("project_dir_expand_failed", path = raw).to_string())?;
    let path = base.join(&*expanded);
    let canonical = fs::canonicalize(&path)
        .with_context(|| t!("project_dir_not_found", path = path.display()).to_string())?;
    if !canonical.is_dir() {
        anyhow::bail!(t!("project_dir_not_found", path = canonical.display()).to_string());
    }
    Ok(canonical)
}

/// Checks whether the classpath entry produced by the build step exists.
pub fn artifact_exists(project_dir: &Path, classpath: &str) -> bool {
    project_dir.join(classpath).exists()
}

/// Writes `contents` to `path`. Refuses to replace an existing file unless `force` is set.
///
/// # Returns
/// `Ok(false)` if the file already existed and was left untouched
pub fn write_config_file(path: &Path, contents: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    fs::write(path, contents)
        .with_context(|| t!("init_config_write_failed", path = path.display()).to_string())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_project_dir_rejects_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(resolve_project_dir(missing.to_str().unwrap(), Path::new(".")).is_err());
    }

    #[test]
    fn test_resolve_project_dir_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(resolve_project_dir(file.to_str().unwrap(), Path::new(".")).is_err());
    }

    #[test]
    fn test_resolve_project_dir_joins_relative_paths_onto_base() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sst")).unwrap();

        let resolved = resolve_project_dir("sst", dir.path()).unwrap();
        assert_eq!(resolved, fs::canonicalize(dir.path().join("sst")).unwrap());

        let absolute = resolve_project_dir(dir.path().to_str().unwrap(), Path::new("/nonexistent")).unwrap();
        assert_eq!(absolute, fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_write_config_file_respects_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("TestDriver.toml");

        assert!(write_config_file(&path, "variant = \"jar\"\n", false).unwrap());
        assert!(!write_config_file(&path, "variant = \"sync\"\n", false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "variant = \"jar\"\n");

        assert!(write_config_file(&path, "variant = \"sync\"\n", true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "variant = \"sync\"\n");
    }

    #[test]
    fn test_artifact_exists() {
        let dir = tempdir().unwrap();
        assert!(!artifact_exists(dir.path(), "sst.jar"));
        fs::write(dir.path().join("sst.jar"), b"PK").unwrap();
        assert!(artifact_exists(dir.path(), "sst.jar"));
    }
}
