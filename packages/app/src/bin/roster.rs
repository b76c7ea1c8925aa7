//! Runs the live and test composition roots and prints their results.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roster -- --composition all --format text
//! ```

use clap::Parser;
use roster::ui::Args;
use roster_shared::logger::setup_logger;

fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), args.log_level);

    if let Err(e) = roster::run_cli(args) {
        tracing::error!("Roster error: {}", e);
        std::process::exit(1);
    }
}
