//! # Kiosk Terminal Library
//!
//! Core library for the kiosk ordering terminal.
//! This is the main entry point that loads the menu and runs the request loop.
//!
//! ## Module Organization
//! ```text
//! kiosk_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── request.rs      ◄─── JSON-lines parsing and dispatch
//! ├── state/
//! │   ├── mod.rs      ◄─── KioskSession and state exports
//! │   ├── catalog.rs  ◄─── Loaded menu
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── order.rs    ◄─── Order numbers
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Menu browsing
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── order.rs    ◄─── Order submission
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## I/O Channels
//! Responses go to stdout, one JSON object per line. Logs go to stderr so
//! they never interleave with responses.

pub mod commands;
pub mod error;
pub mod request;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::StartupError;
use kiosk_core::MenuCatalog;
use state::{ConfigState, KioskSession};

/// Runs the kiosk terminal until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Terminal Startup                                  │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • KIOSK_* environment variables over defaults                       │
/// │                                                                         │
/// │  3. Load Menu ────────────────────────────────────────────────────────► │
/// │     • KIOSK_MENU_PATH, else menu.json in the config dir                 │
/// │     • Built-in menu when neither exists                                 │
/// │                                                                         │
/// │  4. Create Session ───────────────────────────────────────────────────► │
/// │     • Empty cart, order numbers from the configured range               │
/// │                                                                         │
/// │  5. Serve stdin → stdout ─────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), StartupError> {
    init_tracing();

    info!("Starting kiosk terminal");

    let config = ConfigState::from_env();
    let catalog = load_catalog(&config)?;
    info!(
        store = config.store_name.as_str(),
        items = catalog.len(),
        "Menu loaded"
    );

    let session = KioskSession::new(config, catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    request::serve(&session, stdin.lock(), stdout.lock())?;

    info!("Kiosk terminal stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kiosk_core=trace` - Show every cart change notification
/// - Default: INFO, DEBUG for the terminal crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kiosk_terminal=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the menu named by the configuration, or the built-in one.
pub fn load_catalog(config: &ConfigState) -> Result<MenuCatalog, StartupError> {
    let Some(path) = config.resolve_menu_path() else {
        info!("No menu file found, using built-in menu");
        return Ok(MenuCatalog::builtin());
    };

    info!(path = %path.display(), "Loading menu file");
    let json = std::fs::read_to_string(&path).map_err(|source| StartupError::MenuFile {
        path: path.clone(),
        source,
    })?;
    MenuCatalog::from_json(&json).map_err(|source| StartupError::Menu { path, source })
}
