//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole page runtime.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** that hides module paths; the `component_type` field says who logged
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle: mounts, submissions, shutdown
//! RUST_LOG=debug cargo run     # every dispatched event with its payload
//! ```
//!
//! With `RUST_LOG=debug` a toggle click reads:
//!
//! ```text
//! DEBUG Dispatch component_type="MenuController" event=ToggleActivated
//! INFO  Menu toggled is_open=true
//! ```

/// Initializes the global tracing subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
