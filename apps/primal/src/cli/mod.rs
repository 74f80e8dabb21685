//! # Primal CLI Module
//!
//! This module implements the CLI interface for Primal.
//!
//! ## Available Commands
//!
//! - `check` - Test a single integer for primality
//! - `sieve` - List all primes up to a limit
//! - `twins` - List twin prime pairs
//! - `mersenne` - List Mersenne primes
//! - `sophie` - List Sophie Germain primes
//! - `palindromic` - List palindromic primes
//! - `favored` - Build the favored sequence
//! - `classify` - Show category membership of an integer
//! - `analyze` - Pattern analysis of a prime list
//! - `report` - Extended resonance report of a prime list
//! - `demo` - Full walkthrough of every operation
//! - `server` - Start the HTTP server

mod commands;

use crate::config::PrimalConfig;
use clap::{Args, Parser, Subcommand};
use primal_core::PrimalError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Primal - deterministic prime engine
///
/// Primality, enumeration, named prime subsets and resonance scoring.
#[derive(Parser, Debug)]
#[command(name = "primal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Path to a TOML configuration file (default: ./primal.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Input list for `analyze` and `report`.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct PrimeSource {
    /// Comma-separated list of primes
    #[arg(short, long, allow_hyphen_values = true)]
    pub primes: Option<String>,

    /// Analyze all primes up to this limit
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<String>,
}

/// Available CLI commands.
///
/// Numeric arguments are taken as text and parsed by the boundary parser,
/// so negatives clamp to 0 and malformed values fail with "invalid input".
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test a single integer for primality
    Check {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },

    /// List all primes up to LIMIT
    Sieve {
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// List twin prime pairs up to LIMIT
    Twins {
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// List Mersenne primes 2^p - 1 for prime p <= MAX_EXPONENT
    Mersenne {
        #[arg(default_value = "31", allow_hyphen_values = true)]
        max_exponent: String,
    },

    /// List Sophie Germain primes up to LIMIT
    Sophie {
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// List palindromic primes up to LIMIT
    Palindromic {
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Build the favored sequence of COUNT primes
    Favored {
        #[arg(default_value = "50", allow_hyphen_values = true)]
        count: String,
    },

    /// Show category membership and composite resonance of N
    Classify {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },

    /// Pattern analysis of a prime list
    Analyze {
        #[command(flatten)]
        source: PrimeSource,
    },

    /// Extended resonance report of a prime list
    Report {
        #[command(flatten)]
        source: PrimeSource,
    },

    /// Walk through every operation
    Demo {
        /// Enumeration limit used throughout the walkthrough
        #[arg(short, long, default_value = "1000")]
        limit: u64,
    },

    /// Start HTTP server
    Server {
        /// Host to bind to (default from config, then 127.0.0.1)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (default from config, then 8080)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PrimalError> {
    let config = PrimalConfig::resolve(cli.config.as_deref())?;
    let ctx = CommandContext::new(&config, cli.json_mode);

    match cli.command {
        Some(Commands::Check { n }) => cmd_check(&ctx, &n),
        Some(Commands::Sieve { limit }) => cmd_sieve(&ctx, &limit),
        Some(Commands::Twins { limit }) => cmd_twins(&ctx, &limit),
        Some(Commands::Mersenne { max_exponent }) => cmd_mersenne(&ctx, &max_exponent),
        Some(Commands::Sophie { limit }) => cmd_sophie(&ctx, &limit),
        Some(Commands::Palindromic { limit }) => cmd_palindromic(&ctx, &limit),
        Some(Commands::Favored { count }) => cmd_favored(&ctx, &count),
        Some(Commands::Classify { n }) => cmd_classify(&ctx, &n),
        Some(Commands::Analyze { source }) => cmd_analyze(&ctx, &source),
        Some(Commands::Report { source }) => cmd_report(&ctx, &source),
        Some(Commands::Demo { limit }) => cmd_demo(&ctx, limit),
        Some(Commands::Server { host, port }) => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            cmd_server(ctx, &host, port).await
        }
        None => {
            // No subcommand - run the walkthrough by default
            cmd_demo(&ctx, DEFAULT_DEMO_LIMIT)
        }
    }
}
