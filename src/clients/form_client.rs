//! # Form Client
//!
//! Provides a high-level API for interacting with the form actor.
//! It wraps a `ComponentClient<FormValidator>` and exposes form-specific methods.
use super::recover_error;
use crate::form_validator::{FormError, FormValidator};
use crate::model::{Field, FieldState, FormEvent};
use async_trait::async_trait;
use component_framework::{ComponentClient, ControllerClient, FrameworkError, Handled, Mounted};
use tracing::{debug, instrument};

/// Client for interacting with the form actor.
#[derive(Clone)]
pub struct FormClient {
    inner: ComponentClient<FormValidator>,
}

impl FormClient {
    pub fn new(inner: ComponentClient<FormValidator>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ControllerClient<FormValidator> for FormClient {
    type Error = FormError;

    fn inner(&self) -> &ComponentClient<FormValidator> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e, FormError::ActorCommunicationError)
    }
}

impl FormClient {
    /// Attaches the form's listeners. Repeated calls are no-ops.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<Mounted, FormError> {
        debug!("Sending request");
        self.inner.mount().await.map_err(Self::map_error)
    }

    /// Validates `field` against its current value and returns the resulting state.
    #[instrument(skip(self))]
    pub async fn field_input(&self, field: Field) -> Result<FieldState, FormError> {
        debug!("Sending request");
        self.dispatch(FormEvent::FieldInput(field)).await?;
        Ok(self.snapshot().await?.field(field))
    }

    #[instrument(skip(self))]
    pub async fn submit_attempted(&self) -> Result<Handled, FormError> {
        debug!("Sending request");
        self.dispatch(FormEvent::SubmitAttempted).await
    }

    /// Hides the acknowledgment now, cancelling any pending auto-hide.
    #[instrument(skip(self))]
    pub async fn hide_acknowledgment(&self) -> Result<(), FormError> {
        debug!("Sending request");
        self.dispatch(FormEvent::HideAcknowledgment { generation: None })
            .await
            .map(|_| ())
    }

    async fn dispatch(&self, event: FormEvent) -> Result<Handled, FormError> {
        self.inner.dispatch(event).await.map_err(Self::map_error)
    }
}
