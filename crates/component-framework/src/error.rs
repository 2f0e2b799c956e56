//! # Framework Errors
//!
//! Common error types shared by every component actor and client.

/// Errors that can occur within the component framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Component is not mounted")]
    NotMounted,
    #[error("Component error: {0}")]
    ComponentError(Box<dyn std::error::Error + Send + Sync>),
}
