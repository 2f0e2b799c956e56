//! Fields, per-field state and submission outcomes of the contact form.
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

/// The three validated inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Submission order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(label)
    }
}

/// Last observed value of a field and the error currently shown for it.
///
/// `error_message` is empty exactly when the last validation passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub value: String,
    pub error_message: String,
}

/// How the last submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Submission {
    Accepted,
    Rejected { invalid: Vec<Field> },
}

/// Inputs the form validator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited a field.
    FieldInput(Field),
    /// The form was submitted.
    SubmitAttempted,
    /// Hide the acknowledgment. `Some(generation)` comes from the timer armed by the
    /// accepted submission with that number and is ignored once a newer one exists.
    /// `None` hides unconditionally.
    HideAcknowledgment { generation: Option<u32> },
}

/// Read-only view of the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub fields: BTreeMap<Field, FieldState>,
    pub acknowledgment_visible: bool,
    /// True while an auto-hide timer is armed.
    pub hide_pending: bool,
    pub last_submission: Option<Submission>,
    pub accepted_count: u32,
}

impl FormSnapshot {
    pub fn field(&self, field: Field) -> FieldState {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    /// True when no field currently shows an error.
    pub fn is_clean(&self) -> bool {
        self.fields.values().all(|state| state.error_message.is_empty())
    }
}
