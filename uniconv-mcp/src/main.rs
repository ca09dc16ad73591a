//! uniconv MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdin/stdout.
//!
//! Tools:
//! - list_categories: Measurement categories with unit counts
//! - list_units: Units of a category
//! - convert: Convert a value between two units of a category
//! - swap: Convert again with source and target exchanged
//! - compare: A value expressed in every unit of its category
//! - history / clear_history: Recent conversions of this session
//!
//! Resources:
//! - uniconv://categories - The whole catalog
//! - uniconv://categories/{name} - One category

mod config;
mod server;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};
use crate::config::ServerConfig;
use crate::server::{Server, PROTOCOL_VERSION};

/// Logs go to stderr; stdout carries the protocol
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(true),
        )
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut server = match Server::new(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        protocol = PROTOCOL_VERSION,
        precision = config.precision.digits(),
        history_limit = config.history_limit,
        default_category = %config.default_category,
        "uniconv MCP server ready"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received");

                let Some(response) = server.handle_line(line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response).and_then(|_| stdout.flush()) {
                    error!("error writing response: {}", e);
                    break;
                }
            }
            Err(e) => {
                error!("error reading input: {}", e);
                break;
            }
        }
    }

    info!("server shutting down");
    ExitCode::SUCCESS
}
