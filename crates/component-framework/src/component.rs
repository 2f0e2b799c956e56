//! # Component Trait
//!
//! The `Component` trait is the contract every interactive controller (menu, form, ...)
//! implements to be driven by the generic [`ComponentActor`](crate::ComponentActor).
//! It names the events the component reacts to, the snapshot it exposes for
//! inspection, the host context it needs, and its error type.
//!
//! # Lifecycle
//!
//! - [`Component::on_mount`] runs once per successful initialization. This is where a
//!   component resolves its elements and registers listeners.
//! - [`Component::handle_event`] runs for every dispatched event, sequentially.
//! - [`Component::on_unmount`] runs on teardown. Listeners are disposed here.
//!
//! Event handlers are synchronous on purpose: a handler can never yield halfway, so two
//! events for the same component never interleave.

use crate::handle::ComponentHandle;
use async_trait::async_trait;
use std::fmt::Debug;

/// What a handler asks of the host after processing an event.
///
/// Mirrors the two controls a browser event offers: stopping further propagation and
/// suppressing the default action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Handled {
    pub propagation_stopped: bool,
    pub default_prevented: bool,
}

impl Handled {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(mut self) -> Self {
        self.propagation_stopped = true;
        self
    }

    pub fn prevent_default(mut self) -> Self {
        self.default_prevented = true;
        self
    }
}

/// Result of an initialization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mounted {
    /// `on_mount` ran and succeeded; listeners are attached.
    Initialized,
    /// The component was already mounted; nothing was done.
    AlreadyInitialized,
}

/// Trait that any controller must implement to be managed by `ComponentActor`.
///
/// # Async & Context
/// Mount and unmount hooks are `#[async_trait]`, matching the rest of the framework.
/// The `Context` type is injected into every hook at `run()` time, so dependencies are
/// bound late (the host DOM, the event bus, ...).
#[async_trait]
pub trait Component: Send + Sync + Sized + 'static {
    /// Events the component reacts to (e.g. `ToggleActivated`).
    type Event: Send + Sync + Debug + 'static;

    /// Read-only view of the component state, returned by snapshot requests.
    type Snapshot: Send + Sync + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this component.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called on the first initialization request.
    ///
    /// If this returns an error the component stays unmounted and a later
    /// initialization request will call it again.
    async fn on_mount(
        &mut self,
        ctx: &Self::Context,
        handle: &ComponentHandle<Self>,
    ) -> Result<(), Self::Error>;

    /// Handle one event. Runs to completion before the next request is processed.
    fn handle_event(
        &mut self,
        event: Self::Event,
        ctx: &Self::Context,
        handle: &ComponentHandle<Self>,
    ) -> Result<Handled, Self::Error>;

    /// Called when the component is torn down while mounted.
    async fn on_unmount(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Current state, for clients and tests.
    fn snapshot(&self) -> Self::Snapshot;
}
