//! State and events of the navigation menu.
//!
//! The menu only ever knows one thing: whether its panel is open. The visible
//! marker on the panel always mirrors [`MenuState::is_open`].
use crate::dom::NodeId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuState {
    pub is_open: bool,
}

/// Inputs the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The toggle button was activated. Flips the panel.
    ToggleActivated,
    /// A link inside the panel was activated. Closes the panel.
    LinkActivated { index: usize },
    /// A click reached the document root. Closes the panel unless `target` lies inside
    /// the navigation region.
    OutsideActivated { target: NodeId },
}
