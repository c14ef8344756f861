//! # Prize Calculator Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse the command line
//! 3. Load configuration (file, then `PRIZE_*` variables)
//! 4. Run the command and print its output

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for testability
    prize_cli::run()
}
