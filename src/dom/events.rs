//! # Event Bus
//!
//! Explicit listener registration and bubbling dispatch over the [`Document`](super::Document).
//!
//! Controllers subscribe on a node or on the document itself and get back a
//! [`Subscription`]; dropping the subscription detaches the listener. Dispatch walks
//! target → ancestors → document. Every listener on a node runs; if any of them stops
//! propagation, no further node is visited.
//!
//! Each listener's reply is awaited before the next listener runs, so one activation is
//! fully handled before the caller sees the [`DispatchOutcome`].

use super::{DomHandle, NodeId};
use async_trait::async_trait;
use component_framework::{Component, FrameworkError, Handled, WeakComponentClient};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Kinds of input the host delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Submit,
}

/// A host event: what happened and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: NodeId,
}

impl DomEvent {
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
        }
    }

    pub fn input(target: NodeId) -> Self {
        Self {
            kind: EventKind::Input,
            target,
        }
    }

    pub fn submit(target: NodeId) -> Self {
        Self {
            kind: EventKind::Submit,
            target,
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    /// The document root. Sees every event that was not stopped on the way up.
    Document,
    Node(NodeId),
}

/// Something that reacts to host events.
#[async_trait]
pub trait Listener: Send + Sync {
    async fn handle(&self, event: &DomEvent) -> Result<Handled, FrameworkError>;
}

/// Routes host events into a component, translating each into a component event.
///
/// Holds a weak client: a registered listener never keeps its component alive.
pub struct ComponentListener<C: Component, F> {
    client: WeakComponentClient<C>,
    map: F,
}

impl<C, F> ComponentListener<C, F>
where
    C: Component,
    F: Fn(&DomEvent) -> C::Event + Send + Sync + 'static,
{
    pub fn new(client: WeakComponentClient<C>, map: F) -> Self {
        Self { client, map }
    }
}

#[async_trait]
impl<C, F> Listener for ComponentListener<C, F>
where
    C: Component,
    F: Fn(&DomEvent) -> C::Event + Send + Sync + 'static,
{
    async fn handle(&self, event: &DomEvent) -> Result<Handled, FrameworkError> {
        let client = self.client.upgrade().ok_or(FrameworkError::ActorClosed)?;
        client.dispatch((self.map)(event)).await
    }
}

/// Identifies one registration on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    target: ListenerTarget,
    kind: EventKind,
    listener: Arc<dyn Listener>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Summary of one dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchOutcome {
    /// Number of listeners invoked.
    pub delivered: usize,
    pub propagation_stopped: bool,
    pub default_prevented: bool,
    /// Rendered errors from listeners that failed.
    pub failures: Vec<String>,
}

/// The page's listener registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attaches `listener` for `kind` events reaching `target`.
    pub fn subscribe(
        &self,
        target: ListenerTarget,
        kind: EventKind,
        listener: impl Listener + 'static,
    ) -> Subscription {
        let mut registry = self.registry();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            target,
            kind,
            listener: Arc::new(listener),
        });
        debug!(?target, ?kind, listener = id.0, "Listener attached");
        Subscription {
            id,
            bus: self.clone(),
        }
    }

    /// Detaches a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.registry();
        let before = registry.entries.len();
        registry.entries.retain(|entry| entry.id != id);
        let removed = registry.entries.len() != before;
        if removed {
            debug!(listener = id.0, "Listener detached");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.registry().entries.len()
    }

    /// Number of listeners for `kind` attached directly to `target`.
    pub fn listeners_on(&self, target: ListenerTarget, kind: EventKind) -> usize {
        self.registry()
            .entries
            .iter()
            .filter(|entry| entry.target == target && entry.kind == kind)
            .count()
    }

    fn listeners_for(&self, target: ListenerTarget, kind: EventKind) -> Vec<Arc<dyn Listener>> {
        self.registry()
            .entries
            .iter()
            .filter(|entry| entry.target == target && entry.kind == kind)
            .map(|entry| entry.listener.clone())
            .collect()
    }

    /// Delivers `event` along its propagation path.
    pub async fn dispatch(&self, dom: &DomHandle, event: DomEvent) -> DispatchOutcome {
        let mut path: Vec<ListenerTarget> = dom
            .read(|doc| doc.ancestors(event.target))
            .into_iter()
            .map(ListenerTarget::Node)
            .collect();
        path.push(ListenerTarget::Document);

        let mut outcome = DispatchOutcome::default();
        for target in path {
            for listener in self.listeners_for(target, event.kind) {
                outcome.delivered += 1;
                match listener.handle(&event).await {
                    Ok(handled) => {
                        outcome.propagation_stopped |= handled.propagation_stopped;
                        outcome.default_prevented |= handled.default_prevented;
                    }
                    Err(e) => {
                        warn!(?target, kind = ?event.kind, error = %e, "Listener failed");
                        outcome.failures.push(e.to_string());
                    }
                }
            }
            if outcome.propagation_stopped {
                debug!(?target, kind = ?event.kind, "Propagation stopped");
                break;
            }
        }
        outcome
    }
}

/// A live listener registration. Dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    id: ListenerId,
    bus: EventBus,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Detaches the listener now.
    pub fn dispose(self) {}
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.id);
    }
}
