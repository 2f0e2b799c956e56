//! # Page Lifecycle & Orchestration
//!
//! Starts the controller actors for one page, wires them to the shared host, feeds host
//! events through the event bus and shuts everything down again.
//!
//! ## The Page Pattern
//!
//! [`Page`] plays the conductor:
//!
//! 1. **Actor Creation**: `menu_controller::new()` and `form_validator::new()` create each
//!    actor with its client.
//! 2. **Late Binding**: every actor receives the [`Host`](crate::dom::Host) (document plus
//!    event bus) as its context in `run(host)`.
//! 3. **Initialization**: [`Page::lifecycle`] initializes the controllers when the host
//!    signals `DomContentLoaded` and `Load`. Initialization is idempotent, so the second
//!    signal attaches nothing new.
//! 4. **Graceful Shutdown**: [`Page::shutdown`] drops the clients and awaits the actors.
//!    Each actor unmounts its controller on the way out, which detaches its listeners.
//!
//! ## Failure Isolation
//!
//! - A controller whose elements are missing fails its own initialization and logs it.
//!   The other controller initializes normally.
//! - A listener that fails while handling an event is reported by [`Diagnostics`]: the
//!   message goes to the log and to a banner at the end of the body. Dispatch continues
//!   with the remaining listeners.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the binary. See
//! [`component_framework::tracing`] for log levels and sample output.

pub mod diagnostics;
pub mod page;

pub use component_framework::tracing::setup_tracing;
pub use diagnostics::*;
pub use page::*;
