// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use pokedraft_app::AppState;
use runtime::CatalogRuntime;
use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    match options.action {
        CliAction::Help => {
            print_help();
            return Ok(());
        }
        CliAction::PrintConfigPath => {
            println!("{}", options.config_path.display());
            return Ok(());
        }
        CliAction::PrintExampleConfig => {
            print!("{}", Config::example_config(&options.config_path));
            return Ok(());
        }
        CliAction::Check | CliAction::Run => {}
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `pokedraft --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;
    let picker = config.picker()?;

    let client = pokedraft_catalog::Client::new(
        config.catalog_base_url(),
        config.catalog_timeout()?,
    )
    .with_context(|| {
        format!(
            "invalid [catalog] config in {}; fix base_url/timeout values",
            options.config_path.display()
        )
    })?;
    if options.action == CliAction::Check {
        println!("config {} ok", options.config_path.display());
        return Ok(());
    }

    init_logging(&config)?;
    log::info!(
        "starting with catalog {} (page size {}, team size {})",
        client.base_url(),
        picker.page_size,
        picker.max_team_size
    );

    let mut state = AppState::default();
    let mut runtime = CatalogRuntime::new(client);
    pokedraft_tui::run_app(&mut state, &mut runtime, picker)
}

fn init_logging(config: &Config) -> Result<()> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("initialize logger")?;
    Ok(())
}

/// What the binary does after parsing. When several flags are given the
/// highest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CliAction {
    Run,
    Check,
    PrintExampleConfig,
    PrintConfigPath,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    action: CliAction,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config_path = default_config_path;
    let mut action = CliAction::Run;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let flag = match arg.as_ref() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                config_path = PathBuf::from(path.as_ref());
                continue;
            }
            other if other.starts_with("--config=") => {
                let path = &other["--config=".len()..];
                if path.is_empty() {
                    bail!("--config requires a file path");
                }
                config_path = PathBuf::from(path);
                continue;
            }
            "--check" => CliAction::Check,
            "--print-example-config" => CliAction::PrintExampleConfig,
            "--print-config-path" => CliAction::PrintConfigPath,
            "--help" | "-h" => CliAction::Help,
            unknown => {
                bail!("unknown argument {unknown:?}; run with --help to see supported options")
            }
        };
        action = action.max(flag);
    }

    Ok(CliOptions {
        config_path,
        action,
    })
}

fn print_help() {
    println!("pokedraft: pick a pokemon team from the terminal");
    println!("  --config <path>          Read config from <path> (also --config=<path>)");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and catalog settings, then exit");
    println!("  --help                   Show this help");
}
