//! CLI adapter for markua-index
//!
//! Provides the command-line front ends for the core library. Each
//! binary parses its own argument struct, loads the configuration and
//! hands both to the matching command.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//!   markua-index               remove-fences
//! ```

pub mod commands;
pub mod output;

use std::error::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::Config;

pub use commands::{IndexArgs, RemoveFencesArgs};

/// Default log filter when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "markua_index=warn";

/// Initialize tracing on stderr, keeping stdout for results
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .compact(),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }
}

/// Run the markua-index command with the provided arguments
pub fn run_index(args: IndexArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    config.log_config();
    commands::index::execute(args, &config)
}

/// Run the remove-fences command with the provided arguments
pub fn run_remove_fences(args: RemoveFencesArgs) -> Result<(), Box<dyn Error>> {
    commands::remove_fences::execute(args)
}
