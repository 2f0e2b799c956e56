use crate::dom::MissingElementError;
use thiserror::Error;

/// Errors raised by the menu controller and its client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// Initialization found no toggle or no panel; no listeners were attached.
    #[error(transparent)]
    MissingElement(#[from] MissingElementError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
