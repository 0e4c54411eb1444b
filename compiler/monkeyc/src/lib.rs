//! Monkey front-end driver.
//!
//! Library half of the `monkey` binary. Command handlers live in
//! [`commands`] so integration tests can call them without spawning a
//! process.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=monkey_lexer=trace`: log every token the scanner produces.
//! - `RUST_LOG=monkeyc=debug`: log command dispatch and file loading.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `RUST_LOG` is set, so normal runs pay no logging cost.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
