// src/cli/commands/init.rs

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::{
    core::config::{DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE},
    infra::{fs, t},
};

/// Writes the default `TestDriver.toml` into the project directory.
///
/// An existing file is left alone unless `force` is set; that case prints a
/// notice and still succeeds.
pub fn execute(project_dir: Option<&str>, force: bool) -> Result<()> {
    let root = fs::resolve_project_dir(project_dir.unwrap_or("."), Path::new("."))?;
    let config_path = root.join(DEFAULT_CONFIG_FILE);

    if fs::write_config_file(&config_path, DEFAULT_CONFIG_TEMPLATE, force)? {
        println!(
            "{}",
            t!("init_config_written", path = config_path.display()).green()
        );
    } else {
        println!(
            "{}",
            t!("init_config_exists", path = config_path.display()).yellow()
        );
    }
    Ok(())
}
