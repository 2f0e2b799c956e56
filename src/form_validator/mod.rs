//! # Form Validator
//!
//! Live validation and submission handling for the contact form.
//!
//! ## Overview
//!
//! - Editing a field validates that field and shows (or clears) its error message.
//! - Submitting always prevents the native submission, then validates all three fields
//!   against their current values. Any failure leaves the form as it is.
//! - An accepted submission shows the acknowledgment, clears every field and error,
//!   and hides the acknowledgment after the configured delay (4 seconds by default).
//!   A new accepted submission while the acknowledgment is up restarts the delay.
//!
//! Validity is never cached between events: a field that was valid during editing and
//! changed since is validated again on submit.
//!
//! ## Structure
//!
//! - [`component`] - [`Component`](component_framework::Component) implementation for
//!   [`FormValidator`]
//! - [`validators`] - pure per-field rules
//! - [`error`] - [`FormError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod component;
pub mod error;
pub mod validators;

pub use component::*;
pub use error::*;
pub use validators::{validate, ValidationResult};

use crate::clients::FormClient;
use crate::config::FormConfig;
use component_framework::ComponentActor;

/// Creates a new form actor and its client.
pub fn new(config: FormConfig) -> (ComponentActor<FormValidator>, FormClient) {
    let (actor, generic_client) = ComponentActor::new(FormValidator::new(config), 32);
    let client = FormClient::new(generic_client);

    (actor, client)
}
