//! # Kiosk Terminal Entry Point
//!
//! Reads JSON requests from stdin and answers on stdout. The actual setup
//! is in lib.rs.

use std::process::ExitCode;

fn main() -> ExitCode {
    match kiosk_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kiosk: {}", err);
            ExitCode::FAILURE
        }
    }
}
