//! # Component Handle & Scheduled Tasks
//!
//! A [`ComponentHandle`] is what a component gets to refer to *itself* from inside its
//! hooks: to register listeners that route back into its own actor, and to schedule
//! delayed events.
//!
//! Delayed events are [`ScheduledTask`]s. A task sleeps, then dispatches its event
//! through a weak client, so it goes through the same sequential queue as every other
//! event. Tasks can be cancelled; a task whose component is already gone does nothing.

use crate::client::WeakComponentClient;
use crate::component::Component;
use crate::message::ComponentRequest;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Self-reference handed to component hooks by the actor.
pub struct ComponentHandle<C: Component> {
    sender: mpsc::WeakSender<ComponentRequest<C>>,
}

impl<C: Component> Clone for ComponentHandle<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: Component> ComponentHandle<C> {
    pub(crate) fn new(sender: mpsc::WeakSender<ComponentRequest<C>>) -> Self {
        Self { sender }
    }

    /// A client that routes back into this component without keeping it alive.
    pub fn weak_client(&self) -> WeakComponentClient<C> {
        WeakComponentClient::new(self.sender.clone())
    }

    /// Dispatches `event` to this component after `delay`.
    pub fn schedule(&self, delay: Duration, event: C::Event) -> ScheduledTask {
        let client = self.weak_client();
        let label = format!("{event:?}");
        debug!(event = %label, delay_ms = delay.as_millis() as u64, "Scheduling event");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(client) = client.upgrade() else {
                debug!(event = %label, "Component gone, scheduled event dropped");
                return;
            };
            match client.dispatch(event).await {
                Ok(_) => debug!(event = %label, "Scheduled event delivered"),
                Err(e) => warn!(event = %label, error = %e, "Scheduled event failed"),
            }
        });

        ScheduledTask { handle }
    }
}

/// A pending delayed event.
///
/// Dropping the task does not cancel it; call [`ScheduledTask::cancel`].
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Cancels the task. No-op if it already fired.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
