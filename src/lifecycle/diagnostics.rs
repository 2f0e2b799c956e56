//! # Page Diagnostics
//!
//! Surfaces handler failures on the page itself, in a banner appended to the body,
//! and in the log. A failing handler never stops the page from processing further
//! events.

use crate::dom::{DomHandle, Element};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::error;

/// Id of the banner element.
pub const BANNER_ID: &str = "globalErrors";

/// Collects reported errors and renders the most recent one into the banner.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    reported: Arc<Mutex<Vec<String>>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs `message` and shows it in the banner, creating the banner on first use.
    pub fn report(&self, dom: &DomHandle, message: &str) {
        error!(error = message, "Handler error");
        let text = format!("Error: {message}");
        dom.write(|doc| {
            let banner = match doc.get_element_by_id(BANNER_ID) {
                Some(banner) => banner,
                None => {
                    let body = doc.body();
                    doc.append(body, Element::new("div").with_id(BANNER_ID))
                }
            };
            doc.set_text(banner, text);
            doc.set_hidden(banner, false);
        });
        self.reported
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }

    /// Every message reported so far, oldest first.
    pub fn reported(&self) -> Vec<String> {
        self.reported
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
