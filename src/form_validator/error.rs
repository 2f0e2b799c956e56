use crate::dom::MissingElementError;
use thiserror::Error;

/// Errors raised by the form validator and its client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// Initialization could not resolve the form, a field, an error slot or the
    /// acknowledgment element; no listeners were attached.
    #[error(transparent)]
    MissingElement(#[from] MissingElementError),

    #[error("Contact form is not initialized")]
    NotInitialized,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
