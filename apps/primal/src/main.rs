//! # Primal - Prime Engine
//!
//! The main binary for the Primal deterministic prime engine.
//!
//! This application provides:
//! - CLI interface for every engine operation
//! - HTTP REST API server (axum-based)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              apps/primal (THE BINARY)           │
//! │                                                 │
//! │   ┌─────────────┐          ┌─────────────┐      │
//! │   │    CLI      │          │  HTTP API   │      │
//! │   │   (clap)    │          │   (axum)    │      │
//! │   └──────┬──────┘          └──────┬──────┘      │
//! │          └────────────┬───────────┘             │
//! │                       ▼                         │
//! │               ┌───────────────┐                 │
//! │               │  primal-core  │                 │
//! │               │  (THE LOGIC)  │                 │
//! │               └───────────────┘                 │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! primal server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! primal check 7919
//! primal favored 20 --json-mode
//! primal report --limit 1000
//! ```

use clap::Parser;
use primal::cli;
use primal::config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing on stderr; PRIMAL_LOG_FORMAT=json enables machine-parseable output.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "primal=info,primal_core=info,tower_http=debug".into());

    match LogFormat::from_env() {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner (never in JSON mode, stdout must stay parseable)
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Primal startup banner.
fn print_banner() {
    println!(
        r#"
  ██████╗ ██████╗ ██╗███╗   ███╗ █████╗ ██╗
  ██╔══██╗██╔══██╗██║████╗ ████║██╔══██╗██║
  ██████╔╝██████╔╝██║██╔████╔██║███████║██║
  ██╔═══╝ ██╔══██╗██║██║╚██╔╝██║██╔══██║██║
  ██║     ██║  ██║██║██║ ╚═╝ ██║██║  ██║███████╗
  ╚═╝     ╚═╝  ╚═╝╚═╝╚═╝     ╚═╝╚═╝  ╚═╝╚══════╝

  Prime Engine v{}

  Deterministic • Bounded • Reproducible
"#,
        env!("CARGO_PKG_VERSION")
    );
}
