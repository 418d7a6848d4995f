//! Strkey CLI
//!
//! Encode, decode, inspect and validate strkeys from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use strkey_lib::VersionByte;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod ui;

use config::{CliConfig, OutputFormat, FORMAT_ENV};

#[derive(Parser)]
#[command(name = "strkey")]
#[command(about = "Encode, decode and validate checksum-protected strkeys", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, env = FORMAT_ENV, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable coloured output (also honoured via NO_COLOR)
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a strkey into its version and hex payload
    Decode {
        /// The strkey to decode
        strkey: String,

        /// Require this type (account-id, muxed-account, seed, pre-auth-tx, hash-x)
        #[arg(short, long)]
        expect: Option<VersionByte>,

        /// Print seed payloads instead of withholding them
        #[arg(long)]
        reveal: bool,
    },

    /// Encode a hex payload as a strkey
    Encode {
        /// Strkey type (account-id, muxed-account, seed, pre-auth-tx, hash-x)
        version: VersionByte,

        /// Payload as hex, optionally 0x-prefixed
        payload: String,
    },

    /// Show everything a strkey carries
    Inspect {
        /// The strkey to inspect
        strkey: String,

        /// Print seed payloads instead of withholding them
        #[arg(long)]
        reveal: bool,
    },

    /// Check a strkey and report why it is rejected
    Validate {
        /// The strkey to validate
        strkey: String,

        /// Require this type
        #[arg(short, long)]
        expect: Option<VersionByte>,
    },

    /// Generate a new random seed and its account address
    Generate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::resolve(cli.format, cli.no_color, cli.verbose);
    config.apply();

    // Initialize tracing; RUST_LOG takes precedence over the verbosity default.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .init();

    // Dispatch commands
    match cli.command {
        Commands::Decode {
            strkey,
            expect,
            reveal,
        } => {
            commands::decode::run(&config, &strkey, expect, reveal)?;
        }
        Commands::Encode { version, payload } => {
            commands::encode::run(&config, version, &payload)?;
        }
        Commands::Inspect { strkey, reveal } => {
            commands::inspect::run(&config, &strkey, reveal)?;
        }
        Commands::Validate { strkey, expect } => {
            commands::validate::run(&config, &strkey, expect)?;
        }
        Commands::Generate => {
            commands::generate::run(&config)?;
        }
    }

    Ok(())
}
