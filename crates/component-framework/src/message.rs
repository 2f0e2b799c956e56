//! # Generic Messages
//!
//! Message types exchanged between a [`ComponentClient`](crate::ComponentClient) and its
//! [`ComponentActor`](crate::ComponentActor).

use crate::component::{Component, Handled, Mounted};
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// Every component shares the same small lifecycle:
///
/// - **Mount**: initialize once; repeated requests are no-ops.
/// - **Dispatch**: deliver one event to the component's handler.
/// - **Snapshot**: read the current state.
/// - **Unmount**: tear down (dispose listeners) and return to the unmounted state.
#[derive(Debug)]
pub enum ComponentRequest<C: Component> {
    Mount {
        respond_to: Response<Mounted>,
    },
    Dispatch {
        event: C::Event,
        respond_to: Response<Handled>,
    },
    Snapshot {
        respond_to: Response<C::Snapshot>,
    },
    Unmount {
        respond_to: Response<()>,
    },
}
