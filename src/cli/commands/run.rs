// src/cli/commands/run.rs

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::{
    core::{
        config::DriverConfig,
        execution::{run_plan, ProcessLauncher},
        models::RunReport,
        planner, Variant,
    },
    infra::{fs, t},
    reporting::console,
};

/// Options for the default command, as parsed from the command line.
/// `None` means "not given", so the config file or the built-in default applies.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub project_dir: Option<String>,
    pub variant: Option<Variant>,
    pub dry_run: bool,
    pub lang_explicit: bool,
}

/// Runs the build step and every suite in order.
///
/// Returns `None` for a dry run, which prints the plan and launches nothing.
pub async fn execute(options: RunOptions) -> Result<Option<RunReport>> {
    let search_dir = fs::resolve_project_dir(options.project_dir.as_deref().unwrap_or("."), Path::new("."))?;
    let (config, config_path) = DriverConfig::discover(options.config.as_deref(), &search_dir)?;

    if let (Some(language), false) = (config.language.as_deref(), options.lang_explicit) {
        crate::init_locale(Some(language));
    }

    let project_root = resolve_project_root(&options, &config, config_path.as_deref(), search_dir)?;
    let variant = options.variant.unwrap_or(config.variant);
    let plan = planner::plan_execution(variant);

    tracing::debug!(?variant, root = %project_root.display(), "planned run");
    console::print_setup(&project_root, config_path.as_deref(), &plan);

    if options.dry_run {
        console::print_plan(&plan);
        return Ok(None);
    }

    let launcher = ProcessLauncher::new(&project_root);
    let report = run_plan(&plan, &launcher, &project_root)
        .await
        .map_err(|e| {
            let message = t!(
                "launch_failed",
                label = e.kind.label(),
                command = e.command.to_string()
            )
            .to_string();
            anyhow::Error::new(e).context(message)
        })?;
    console::print_run_complete(&report);

    Ok(Some(report))
}

/// `--project-dir` wins; otherwise a `project_dir` from the config file is
/// resolved against the file's own directory.
fn resolve_project_root(
    options: &RunOptions,
    config: &DriverConfig,
    config_path: Option<&Path>,
    search_dir: PathBuf,
) -> Result<PathBuf> {
    match (&options.project_dir, &config.project_dir) {
        (None, Some(configured)) => {
            let base = config_path
                .and_then(Path::parent)
                .unwrap_or(search_dir.as_path());
            fs::resolve_project_dir(configured, base)
        }
        _ => Ok(search_dir),
    }
}
