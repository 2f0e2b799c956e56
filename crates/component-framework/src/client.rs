//! # Generic Client
//!
//! Type-safe handles for talking to a `ComponentActor`.
//!
//! * [`ComponentClient`] holds a strong sender. The actor keeps running while at least
//!   one strong client exists.
//! * [`WeakComponentClient`] does not keep the actor alive. Event listeners and
//!   scheduled tasks hold weak clients so they never block shutdown.

use crate::component::{Component, Handled, Mounted};
use crate::error::FrameworkError;
use crate::message::ComponentRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ComponentActor`.
///
/// Cloning is cheap: the client only holds a channel sender.
pub struct ComponentClient<C: Component> {
    sender: mpsc::Sender<ComponentRequest<C>>,
}

impl<C: Component> Clone for ComponentClient<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: Component> ComponentClient<C> {
    pub fn new(sender: mpsc::Sender<ComponentRequest<C>>) -> Self {
        Self { sender }
    }

    /// Returns a client that does not keep the actor alive.
    pub fn downgrade(&self) -> WeakComponentClient<C> {
        WeakComponentClient::new(self.sender.downgrade())
    }

    pub async fn mount(&self) -> Result<Mounted, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Mount { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn dispatch(&self, event: C::Event) -> Result<Handled, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<C::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn unmount(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Unmount { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

/// A client that does not keep its actor alive.
pub struct WeakComponentClient<C: Component> {
    sender: mpsc::WeakSender<ComponentRequest<C>>,
}

impl<C: Component> Clone for WeakComponentClient<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: Component> WeakComponentClient<C> {
    pub fn new(sender: mpsc::WeakSender<ComponentRequest<C>>) -> Self {
        Self { sender }
    }

    /// Returns a strong client if the actor is still running.
    pub fn upgrade(&self) -> Option<ComponentClient<C>> {
        self.sender.upgrade().map(ComponentClient::new)
    }
}
