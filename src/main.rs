// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Env | File | Options | Configs | Version
//! ```

use std::process::ExitCode;

use filter_env_rs::cli::global::GlobalOptions;
use filter_env_rs::cli::{self, Command};
use filter_env_rs::cmd::config::{run_configs_command, run_options_command};
use filter_env_rs::cmd::filter::{run_env_command, run_file_command};
use filter_env_rs::config::loader::ConfigLoader;
use filter_env_rs::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use filter_env_rs::error::Result;
use filter_env_rs::logging::{LOG_DIRECTIVE_VAR, LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    let console_level = config.global.log_level;
    let file_level = config.global.file_log_level.unwrap_or(console_level);
    let directive = std::env::var(LOG_DIRECTIVE_VAR)
        .ok()
        .filter(|d| !d.trim().is_empty());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .maybe_with_directive(directive)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => run_options_command(config),
        Some(Command::Configs) => build_config_loader(&cli.global)
            .and_then(|loader| run_configs_command(&loader.describe_sources())),
        Some(Command::Env(args)) => run_env_command(args, config),
        Some(Command::File(args)) => run_file_command(args, config),
        None => Err(anyhow::anyhow!(
            "no command specified, use --help for usage information"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.with_default_file(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.with_file(path);
    }
    for (key, value) in global.to_config_overrides() {
        loader = loader.with_override(&key, value)?;
    }
    Ok(loader.with_env_prefix(ENV_PREFIX))
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?.build()
}
