//! Type-safe wrappers around [`ComponentClient`](component_framework::ComponentClient).

pub mod form_client;
pub mod menu_client;

pub use form_client::*;
pub use menu_client::*;

use component_framework::FrameworkError;

/// Recovers the controller's own error from a framework error, falling back to a
/// communication error for everything else.
pub(crate) fn recover_error<E>(e: FrameworkError, communication: fn(String) -> E) -> E
where
    E: std::error::Error + 'static,
{
    match e {
        FrameworkError::ComponentError(inner) => match inner.downcast::<E>() {
            Ok(own) => *own,
            Err(other) => communication(other.to_string()),
        },
        other => communication(other.to_string()),
    }
}
