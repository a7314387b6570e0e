//! Moji CLI library.
//!
//! Argument parsing and command handlers for the `moji` binary. The binary
//! itself only wires `std::env::args`, stdin and stdout to [`run`].

mod cli;
mod commands;

use std::sync::Once;

pub use cli::{parse_args, Command, Options, DEFAULT_TEXT};
pub use commands::run;

/// Errors surfaced by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Usage(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => 1,
            CliError::Usage(_) | CliError::UnknownCommand(_) => 2,
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr log subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, so the CLI stays silent by default.
/// Safe to call more than once; only the first call installs anything.
/// Useful filters: `RUST_LOG=moji_scan=trace` (held-back candidates, short
/// buffers), `RUST_LOG=moji_table=debug` (table construction).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);
        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(EnvFilter::from_default_env())
            .init();
    });
}
