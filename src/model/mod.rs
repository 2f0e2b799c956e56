//! Plain data carried between the host, the controllers and their clients.

pub mod form;
pub mod menu;

pub use form::*;
pub use menu::*;
