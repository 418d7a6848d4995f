//! Resolved command-line configuration.
//!
//! Precedence is flag, then environment, then default. Clap handles
//! `--format`/`STRKEY_FORMAT`; colour follows `--no-color` or `NO_COLOR`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Environment variable consulted when `--format` is absent.
pub const FORMAT_ENV: &str = "STRKEY_FORMAT";

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured key/value lines.
    #[default]
    Text,
    /// One JSON document per invocation.
    Json,
}

/// Settings shared by every command.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Output format for results.
    pub format: OutputFormat,
    /// Whether ANSI colours are emitted.
    pub color: bool,
    /// Verbose diagnostics.
    pub verbose: bool,
}

impl CliConfig {
    /// Combine parsed flags with the environment.
    pub fn resolve(format: OutputFormat, no_color: bool, verbose: bool) -> Self {
        let color =
            !no_color && std::env::var_os("NO_COLOR").is_none() && format == OutputFormat::Text;
        Self {
            format,
            color,
            verbose,
        }
    }

    /// Apply process-wide settings derived from this config.
    pub fn apply(&self) {
        colored::control::set_override(self.color);
    }

    /// Default tracing filter for this verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "strkey_cli=debug,strkey_lib=debug"
        } else {
            "strkey_cli=info,strkey_lib=warn"
        }
    }

    /// Whether results are written as JSON.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
