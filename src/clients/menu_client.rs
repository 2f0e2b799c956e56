//! # Menu Client
//!
//! Provides a high-level API for interacting with the menu actor.
//! It wraps a `ComponentClient<MenuController>` and exposes menu-specific methods.
use super::recover_error;
use crate::dom::NodeId;
use crate::menu_controller::{MenuController, MenuError};
use crate::model::MenuEvent;
use async_trait::async_trait;
use component_framework::{ComponentClient, ControllerClient, FrameworkError, Handled, Mounted};
use tracing::{debug, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ComponentClient<MenuController>,
}

impl MenuClient {
    pub fn new(inner: ComponentClient<MenuController>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ControllerClient<MenuController> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ComponentClient<MenuController> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e, MenuError::ActorCommunicationError)
    }
}

impl MenuClient {
    /// Attaches the menu's listeners. Safe to call any number of times; only the first
    /// successful call attaches anything.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<Mounted, MenuError> {
        debug!("Sending request");
        self.inner.mount().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn toggle_activated(&self) -> Result<Handled, MenuError> {
        debug!("Sending request");
        self.dispatch(MenuEvent::ToggleActivated).await
    }

    #[instrument(skip(self))]
    pub async fn link_activated(&self, index: usize) -> Result<Handled, MenuError> {
        debug!("Sending request");
        self.dispatch(MenuEvent::LinkActivated { index }).await
    }

    #[instrument(skip(self))]
    pub async fn outside_activated(&self, target: NodeId) -> Result<Handled, MenuError> {
        debug!("Sending request");
        self.dispatch(MenuEvent::OutsideActivated { target }).await
    }

    pub async fn is_open(&self) -> Result<bool, MenuError> {
        Ok(self.snapshot().await?.is_open)
    }

    async fn dispatch(&self, event: MenuEvent) -> Result<Handled, MenuError> {
        self.inner.dispatch(event).await.map_err(Self::map_error)
    }
}
