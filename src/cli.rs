// src/cli.rs
use anyhow::Result;
use clap::{builder::PossibleValuesParser, Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, process::ExitCode};

use crate::{
    core::Variant,
    infra::{logging, t},
};

pub mod commands;

use commands::run::RunOptions;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("sst-test-driver")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("project-dir")
                .long("project-dir")
                .help(t!("arg_project_dir", locale = locale).to_string())
                .value_name("PROJECT_DIR")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("variant")
                .long("variant")
                .help(t!("arg_variant", locale = locale).to_string())
                .value_name("VARIANT")
                .value_parser(PossibleValuesParser::new(Variant::ALL.map(|v| v.name())))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help(t!("arg_dry_run", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn run_options(matches: &ArgMatches) -> Result<RunOptions> {
    let variant = matches
        .get_one::<String>("variant")
        .map(|name| name.parse::<Variant>())
        .transpose()?;

    Ok(RunOptions {
        config: matches.get_one::<PathBuf>("config").cloned(),
        project_dir: matches.get_one::<String>("project-dir").cloned(),
        variant,
        dry_run: matches.get_flag("dry-run"),
        lang_explicit: matches.contains_id("lang"),
    })
}

/// Parses the command line and runs the selected command.
/// With no subcommand the full build-and-test sequence runs.
pub async fn run() -> Result<ExitCode> {
    // Pre-parse language and initialize i18n first.
    let requested = pre_parse_language();
    let locale = crate::init_locale(requested.as_deref());

    let matches = build_cli(&locale).get_matches();
    logging::init_tracing(matches.get_flag("verbose"));
    tracing::debug!(%locale, "resolved display language");

    match matches.subcommand() {
        Some(("init", init_matches)) => {
            let project_dir = init_matches
                .get_one::<String>("project-dir")
                .or_else(|| matches.get_one::<String>("project-dir"))
                .cloned();
            commands::init::execute(project_dir.as_deref(), init_matches.get_flag("force"))?;
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            let report = commands::run::execute(run_options(&matches)?).await?;
            Ok(report.map_or(ExitCode::SUCCESS, |r| r.exit_code()))
        }
    }
}
