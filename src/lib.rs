//! # Page Controls
//!
//! > **Interactive behavior for a static course-marketing page, built from actors.**
//!
//! Two controllers give the page its behavior:
//!
//! - a **menu controller** that opens and closes the navigation panel on small screens, and
//! - a **form validator** that checks the contact form as it is edited and when it is
//!   submitted, then acknowledges an accepted submission for a few seconds.
//!
//! Both run on the generic [`ComponentActor`](component_framework::ComponentActor) from the
//! `component-framework` crate, against an in-memory document that stands in for the browser.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Run-to-completion handlers
//! Every controller is an actor. Its mailbox is drained one request at a time and its
//! handlers never suspend, so a toggle, a validation pass or an initialization guard can
//! never interleave with another event. The initialization guard lives inside the actor,
//! which makes double initialization (the page signals both `DomContentLoaded` and `Load`)
//! attach listeners exactly once.
//!
//! ### 2. Explicit listener registration
//! Controllers attach listeners through the [`EventBus`](dom::EventBus) and keep the
//! returned [`Subscription`](dom::Subscription)s. Tearing a controller down drops them,
//! which detaches every listener it attached.
//!
//! ### 3. Cancellable timers
//! The acknowledgment auto-hide is a [`ScheduledTask`](component_framework::ScheduledTask)
//! owned by the form validator. A second accepted submission cancels the pending hide and
//! arms a new one.
//!
//! ### 4. Type-Safe Error Handling
//! Each controller has its own error type ([`MenuError`](menu_controller::MenuError),
//! [`FormError`](form_validator::FormError)). Missing elements abort that controller's
//! initialization only; handler failures are shown in the page's error banner.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Host ([`dom`])
//! The element tree, the event bus and a sample page.
//!
//! ### 2. The Controllers ([`menu_controller`], [`form_validator`])
//! Concrete implementations of the [`Component`](component_framework::Component) trait.
//! Their state and events live in [`model`].
//!
//! ### 3. The Interface ([`clients`])
//! [`MenuClient`](clients::MenuClient) and [`FormClient`](clients::FormClient) wrap the
//! generic client with controller-specific methods.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`Page`](lifecycle::Page) spawns the actors, routes host events and shuts down.
//!
//! ### 5. Settings ([`config`])
//! Element ids, class names and the acknowledgment delay, loadable from TOML.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo session with info logs
//! RUST_LOG=info cargo run
//!
//! # Use custom element ids
//! PAGE_CONFIG=page.toml RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod dom;
pub mod form_validator;
pub mod lifecycle;
pub mod menu_controller;
pub mod model;
