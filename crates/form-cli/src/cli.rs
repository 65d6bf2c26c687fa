//! CLI argument definitions for the contact form validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "contact-form",
    version,
    about = "Validate contact form submissions",
    long_about = "Validate contact form submissions (name + email).\n\n\
                  A submission is accepted when the name is not blank and the email\n\
                  looks like local@domain.tld."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include names and email addresses in logs.
    ///
    /// Field values are redacted by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML file overriding labels and banner texts.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a single submission.
    Check(CheckArgs),

    /// Render the form after applying edits.
    Render(RenderArgs),

    /// Validate every row of a CSV file.
    Batch(BatchArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Value of the Name field.
    #[arg(long = "name", default_value = "")]
    pub name: String,

    /// Value of the Email field.
    #[arg(long = "email", default_value = "")]
    pub email: String,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Type this into the Name field.
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Type this into the Email field.
    #[arg(long = "email")]
    pub email: Option<String>,

    /// Click the submit button after typing.
    #[arg(long = "submit")]
    pub submit: bool,

    /// Print the rendered elements as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// CSV file with `name` and `email` columns.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Print the results as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
