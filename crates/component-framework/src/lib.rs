//! # Component Framework
//!
//! Building blocks for event-driven UI controllers that run as actors.
//!
//! Each controller (a navigation menu, a form validator, ...) implements [`Component`]
//! and is driven by a generic [`ComponentActor`]. The actor owns the component's state
//! and processes requests strictly one at a time:
//!
//! - **Mount**: attach listeners once. Repeated initialization is a no-op and reports
//!   [`Mounted::AlreadyInitialized`], so duplicate listener registration cannot happen.
//! - **Dispatch**: run one event handler to completion.
//! - **Snapshot**: read state.
//! - **Unmount**: dispose listeners.
//!
//! ## Why actors for UI handlers?
//!
//! Browser event handlers run to completion without preemption. An actor gives the same
//! guarantee for free: its mailbox is drained sequentially, and handlers are synchronous,
//! so an initialization guard or a state flip can never be split across a suspension
//! point. Nothing else can touch the component's state, so no locks are needed.
//!
//! ## Delayed events
//!
//! [`ComponentHandle::schedule`] sends an event back to the component after a delay and
//! returns a cancellable [`ScheduledTask`]. Scheduled events go through the same mailbox
//! as everything else.
//!
//! ## Lifetime
//!
//! Actors keep only weak references to themselves. Dropping the last
//! [`ComponentClient`] ends the loop; a mounted component is unmounted first.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, for testing
//! routing and error handling around a component without running it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod component;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ComponentActor;
pub use client::{ComponentClient, WeakComponentClient};
pub use client_trait::ControllerClient;
pub use component::{Component, Handled, Mounted};
pub use error::FrameworkError;
pub use handle::{ComponentHandle, ScheduledTask};
pub use message::{ComponentRequest, Response};
