//! # Mock Framework & Testing Guide
//!
//! `MockClient<C>` hands out a real `ComponentClient<C>` whose requests are answered from a
//! queue of expectations instead of a running component. Use it to test code that sits
//! *around* a component (event routing, orchestration, error reporting) without spawning
//! the component itself.
//!
//! ## When to use Mocks vs Real Components
//!
//! | Feature | MockClient | Real Component |
//! |---------|------------|----------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state machine |
//! | **Use Case** | Routing, propagation, error paths | The component's own behavior |
//! | **Error Injection** | Easy (`return_err`) | Hard (needs a broken host) |
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use component_framework::mock::MockClient;
//! use component_framework::{Component, ComponentHandle, FrameworkError, Handled};
//!
//! struct Banner;
//! #[derive(Debug)] enum BannerEvent { Show }
//! #[derive(Debug, thiserror::Error)] #[error("banner error")] struct BannerError;
//!
//! #[async_trait]
//! impl Component for Banner {
//!     type Event = BannerEvent; type Snapshot = bool; type Context = (); type Error = BannerError;
//!     async fn on_mount(&mut self, _: &(), _: &ComponentHandle<Self>) -> Result<(), BannerError> {
//!         Ok(())
//!     }
//!     fn handle_event(
//!         &mut self,
//!         _: BannerEvent,
//!         _: &(),
//!         _: &ComponentHandle<Self>,
//!     ) -> Result<Handled, BannerError> {
//!         Ok(Handled::new())
//!     }
//!     fn snapshot(&self) -> bool { false }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Banner>::new();
//!     mock.expect_dispatch().return_ok(Handled::new().stop_propagation());
//!     mock.expect_dispatch().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.dispatch(BannerEvent::Show).await.unwrap().propagation_stopped);
//!     let closed = client.dispatch(BannerEvent::Show).await;
//!     assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
//!
//!     assert_eq!(mock.received(), vec!["Show".to_string(), "Show".to_string()]);
//!     mock.verify();
//! }
//! ```

use crate::client::ComponentClient;
use crate::component::{Component, Handled, Mounted};
use crate::error::FrameworkError;
use crate::message::ComponentRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<C: Component> {
    Mount {
        response: Result<Mounted, FrameworkError>,
    },
    Dispatch {
        response: Result<Handled, FrameworkError>,
    },
    Snapshot {
        response: Result<C::Snapshot, FrameworkError>,
    },
    Unmount {
        response: Result<(), FrameworkError>,
    },
}

type Expectations<C> = Arc<Mutex<VecDeque<Expectation<C>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation panics the mock task, which surfaces as `ActorDropped` in the caller.
pub struct MockClient<C: Component> {
    client: ComponentClient<C>,
    expectations: Expectations<C>,
    received: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<C: Component> Default for MockClient<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component> MockClient<C> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ComponentRequest<C>>(100);
        let expectations: Expectations<C> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ComponentRequest::Mount { respond_to },
                        Some(Expectation::Mount { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ComponentRequest::Dispatch { event, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        received_clone.lock().unwrap().push(format!("{event:?}"));
                        let _ = respond_to.send(response);
                    }
                    (
                        ComponentRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ComponentRequest::Unmount { respond_to },
                        Some(Expectation::Unmount { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ComponentClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ComponentClient<C> {
        self.client.clone()
    }

    /// Expects a `mount` request.
    pub fn expect_mount(&mut self) -> ExpectationBuilder<C, Mounted> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Mount {
            response,
        })
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder<C, Handled> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Dispatch { response }
        })
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<C, C::Snapshot> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Snapshot { response }
        })
    }

    /// Expects an `unmount` request.
    pub fn expect_unmount(&mut self) -> ExpectationBuilder<C, ()> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Unmount {
            response,
        })
    }

    /// Debug renderings of every event dispatched so far, in arrival order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that queues one expectation with its response.
pub struct ExpectationBuilder<C: Component, T> {
    expectations: Expectations<C>,
    wrap: fn(Result<T, FrameworkError>) -> Expectation<C>,
}

impl<C: Component, T> ExpectationBuilder<C, T> {
    fn new(
        expectations: Expectations<C>,
        wrap: fn(Result<T, FrameworkError>) -> Expectation<C>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
