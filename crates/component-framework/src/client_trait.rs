//! # ControllerClient Trait
//!
//! Common interface for controller-specific clients, adding default `snapshot` and
//! `teardown` methods on top of a generic `ComponentClient`.
use crate::{Component, ComponentClient, FrameworkError};
use async_trait::async_trait;

/// Trait for controller-specific clients to inherit the standard lifecycle operations.
///
/// Implementors supply the inner client and an error mapping; `snapshot` and
/// `teardown` come for free.
#[async_trait]
pub trait ControllerClient<C: Component>: Send + Sync {
    /// The controller-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ComponentClient.
    fn inner(&self) -> &ComponentClient<C>;

    /// Map framework errors to the controller's own error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Read the controller's current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<C::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Detach the controller's listeners. It may be initialized again afterwards.
    #[tracing::instrument(skip(self))]
    async fn teardown(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().unmount().await.map_err(Self::map_error)
    }
}
