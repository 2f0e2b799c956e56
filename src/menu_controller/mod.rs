//! # Menu Controller
//!
//! Toggles the navigation panel on small screens.
//!
//! ## Overview
//!
//! The controller is a two-state machine, `CLOSED` and `OPEN`, starting `CLOSED`:
//!
//! | Input | From | To |
//! |-------|------|----|
//! | toggle activated | either | the other (propagation stopped, default prevented) |
//! | link inside the panel activated | either | `CLOSED` |
//! | click outside the navigation region | `OPEN` | `CLOSED` |
//! | click inside the navigation region | either | unchanged |
//!
//! The panel carries the configured open class exactly while the state is `OPEN`.
//!
//! ## Structure
//!
//! - [`component`] - [`Component`](component_framework::Component) implementation for
//!   [`MenuController`]
//! - [`error`] - [`MenuError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use page_controls::config::MenuConfig;
//! use page_controls::dom::{sample::course_site, Host};
//! use page_controls::menu_controller;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let site = course_site();
//!     let host = Host::new(site.document);
//!
//!     let (actor, client) = menu_controller::new(MenuConfig::default());
//!     tokio::spawn(actor.run(host.clone()));
//!
//!     client.initialize().await?;
//!     client.toggle_activated().await?;
//!     assert!(client.is_open().await?);
//!     Ok(())
//! }
//! ```

pub mod component;
pub mod error;

pub use component::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::config::MenuConfig;
use component_framework::ComponentActor;

/// Creates a new menu actor and its client.
pub fn new(config: MenuConfig) -> (ComponentActor<MenuController>, MenuClient) {
    let (actor, generic_client) = ComponentActor::new(MenuController::new(config), 32);
    let client = MenuClient::new(generic_client);

    (actor, client)
}
