//! Contact form validator CLI.

use clap::{ColorChoice, Parser};
use form_cli::batch::check_file;
use form_cli::commands::{run_check, run_render, to_json};
use form_cli::config::load_form_copy;
use form_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_batch, print_check};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let copy = match load_form_copy(cli.config.as_deref()) {
        Ok(copy) => copy,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let exit_code = match cli.command {
        Command::Check(args) => {
            let result = run_check(&args.name, &args.email, &copy);
            let printed = if args.json {
                to_json(&result).map(|json| println!("{json}"))
            } else {
                print_check(&result);
                Ok(())
            };
            match printed {
                Ok(()) => result.exit_code(),
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Render(args) => {
            let view = run_render(
                args.name.as_deref(),
                args.email.as_deref(),
                args.submit,
                &copy,
            );
            if args.json {
                match to_json(&view) {
                    Ok(json) => {
                        println!("{json}");
                        0
                    }
                    Err(error) => {
                        eprintln!("error: {error:#}");
                        1
                    }
                }
            } else {
                print!("{view}");
                0
            }
        }
        Command::Batch(args) => match check_file(&args.input) {
            Ok(result) => {
                if args.json {
                    match to_json(&result) {
                        Ok(json) => {
                            println!("{json}");
                            result.exit_code()
                        }
                        Err(error) => {
                            eprintln!("error: {error:#}");
                            1
                        }
                    }
                } else {
                    print_batch(&result);
                    result.exit_code()
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
