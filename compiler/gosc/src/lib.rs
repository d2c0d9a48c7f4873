//! Gosling command-line driver.
//!
//! ```text
//! source ──► gos_lexer ──► gos_parse ──► gos_eval
//!              (tokens)     (Program)     (Value)
//! ```
//!
//! The `gos` binary is a thin argument matcher over [`commands`] and
//! [`repl`]; everything it does is callable (and tested) from here.

use std::sync::Once;

pub mod commands;
pub mod repl;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
