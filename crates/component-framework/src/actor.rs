//! # Generic Component Actor
//!
//! `ComponentActor<C>` owns exactly one component and processes its requests one at a
//! time. Each actor runs in its own Tokio task, so the component state needs no locks.

use crate::client::ComponentClient;
use crate::component::{Component, Mounted};
use crate::error::FrameworkError;
use crate::handle::ComponentHandle;
use crate::message::ComponentRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that drives one component.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ComponentActor::new(component, buffer)` returns the actor and a client.
/// 2.  **Wire**: pass the host context into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use component_framework::{Component, ComponentActor, ComponentHandle, Handled, Mounted};
///
/// #[derive(Default)]
/// struct Counter { clicks: u32 }
/// #[derive(Debug)] enum CounterEvent { Click }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl Component for Counter {
///     type Event = CounterEvent;
///     type Snapshot = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn on_mount(
///         &mut self,
///         _: &(),
///         _: &ComponentHandle<Self>,
///     ) -> Result<(), CounterError> {
///         Ok(())
///     }
///     fn handle_event(
///         &mut self,
///         _: CounterEvent,
///         _: &(),
///         _: &ComponentHandle<Self>,
///     ) -> Result<Handled, CounterError> {
///         self.clicks += 1;
///         Ok(Handled::new())
///     }
///     fn snapshot(&self) -> u32 { self.clicks }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ComponentActor::new(Counter::default(), 8);
///     tokio::spawn(actor.run(()));
///
///     assert_eq!(client.mount().await.unwrap(), Mounted::Initialized);
///     assert_eq!(client.mount().await.unwrap(), Mounted::AlreadyInitialized);
///     client.dispatch(CounterEvent::Click).await.unwrap();
///     assert_eq!(client.snapshot().await.unwrap(), 1);
/// }
/// ```
///
/// # Operations
///
/// * **Mount**: no-op (`AlreadyInitialized`) if mounted, otherwise runs `on_mount`. The
///   mounted flag is only set when `on_mount` succeeds.
/// * **Dispatch**: rejected with `NotMounted` before a successful mount, otherwise runs
///   `handle_event` to completion.
/// * **Snapshot**: returns the component's current view.
/// * **Unmount**: runs `on_unmount` if mounted and clears the flag.
///
/// When every strong client is dropped the loop ends; a mounted component is unmounted
/// on the way out.
pub struct ComponentActor<C: Component> {
    receiver: mpsc::Receiver<ComponentRequest<C>>,
    handle: ComponentHandle<C>,
    component: C,
    mounted: bool,
}

impl<C: Component> ComponentActor<C> {
    /// Creates a new `ComponentActor` and its associated `ComponentClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. The actor itself only keeps
    /// a weak sender, so it shuts down once all clients are gone.
    pub fn new(component: C, buffer_size: usize) -> (Self, ComponentClient<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let handle = ComponentHandle::new(sender.downgrade());
        let actor = Self {
            receiver,
            handle,
            component,
            mounted: false,
        };
        (actor, ComponentClient::new(sender))
    }

    /// Runs the actor's event loop until the channel closes.
    pub async fn run(mut self, context: C::Context) {
        // Just the type name, e.g. "MenuController"
        let component_type = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(component_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ComponentRequest::Mount { respond_to } => {
                    if self.mounted {
                        info!(component_type, "Already initialized");
                        let _ = respond_to.send(Ok(Mounted::AlreadyInitialized));
                        continue;
                    }
                    match self.component.on_mount(&context, &self.handle).await {
                        Ok(()) => {
                            self.mounted = true;
                            info!(component_type, "Mounted");
                            let _ = respond_to.send(Ok(Mounted::Initialized));
                        }
                        Err(e) => {
                            warn!(component_type, error = %e, "Mount failed");
                            let _ =
                                respond_to.send(Err(FrameworkError::ComponentError(Box::new(e))));
                        }
                    }
                }
                ComponentRequest::Dispatch { event, respond_to } => {
                    if !self.mounted {
                        warn!(component_type, ?event, "Dispatch before mount");
                        let _ = respond_to.send(Err(FrameworkError::NotMounted));
                        continue;
                    }
                    debug!(component_type, ?event, "Dispatch");
                    let result = self
                        .component
                        .handle_event(event, &context, &self.handle)
                        .map_err(|e| FrameworkError::ComponentError(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(component_type, error = %e, "Dispatch failed");
                    }
                    let _ = respond_to.send(result);
                }
                ComponentRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.component.snapshot()));
                }
                ComponentRequest::Unmount { respond_to } => {
                    let result = self.unmount(component_type, &context).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        if let Err(e) = self.unmount(component_type, &context).await {
            warn!(component_type, error = %e, "Unmount on shutdown failed");
        }
        info!(component_type, "Shutdown");
    }

    async fn unmount(
        &mut self,
        component_type: &str,
        context: &C::Context,
    ) -> Result<(), FrameworkError> {
        if !self.mounted {
            return Ok(());
        }
        self.mounted = false;
        self.component.on_unmount(context).await.map_err(|e| {
            warn!(component_type, error = %e, "on_unmount failed");
            FrameworkError::ComponentError(Box::new(e))
        })?;
        info!(component_type, "Unmounted");
        Ok(())
    }
}
