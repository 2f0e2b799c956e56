use super::validators::{self, ValidationResult};
use super::FormError;
use crate::config::FormConfig;
use crate::dom::{
    ComponentListener, DomEvent, EventKind, Host, ListenerTarget, NodeId, Subscription,
};
use crate::model::{Field, FieldState, FormEvent, FormSnapshot, Submission};
use async_trait::async_trait;
use component_framework::{Component, ComponentHandle, Handled, ScheduledTask};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
struct FieldBinding {
    field: Field,
    input: NodeId,
    error: NodeId,
}

#[derive(Debug, Clone)]
struct Bindings {
    form: NodeId,
    fields: Vec<FieldBinding>,
    success: NodeId,
}

/// Controller for the contact form.
///
/// Validates each field as it is edited and all three on submit. An accepted
/// submission shows the acknowledgment, clears the form and arms a timer that hides
/// the acknowledgment again.
pub struct FormValidator {
    config: FormConfig,
    bindings: Option<Bindings>,
    fields: BTreeMap<Field, FieldState>,
    acknowledgment_visible: bool,
    pending_hide: Option<ScheduledTask>,
    last_submission: Option<Submission>,
    accepted: u32,
    subscriptions: Vec<Subscription>,
}

impl FormValidator {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            bindings: None,
            fields: Field::ALL
                .into_iter()
                .map(|field| (field, FieldState::default()))
                .collect(),
            acknowledgment_visible: false,
            pending_hide: None,
            last_submission: None,
            accepted: 0,
            subscriptions: Vec::new(),
        }
    }

    fn field_id(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.config.name_id,
            Field::Email => &self.config.email_id,
            Field::Message => &self.config.message_id,
        }
    }

    fn bindings(&self) -> Result<&Bindings, FormError> {
        self.bindings.as_ref().ok_or(FormError::NotInitialized)
    }

    fn binding(&self, field: Field) -> Result<FieldBinding, FormError> {
        self.bindings()?
            .fields
            .iter()
            .find(|binding| binding.field == field)
            .copied()
            .ok_or(FormError::NotInitialized)
    }

    /// Reads the live value of `field`, validates it and renders the result into the
    /// field's error slot.
    fn validate_field(&mut self, host: &Host, field: Field) -> Result<ValidationResult, FormError> {
        let binding = self.binding(field)?;
        let value = host
            .dom
            .read(|doc| doc.value(binding.input).unwrap_or_default().to_string());
        let result = validators::validate(field, &value);

        let message = result.message.clone();
        host.dom.write(|doc| doc.set_text(binding.error, message));

        let state = self.fields.entry(field).or_default();
        state.value = value;
        state.error_message = result.message.clone();
        debug!(%field, valid = result.valid, "Field validated");
        Ok(result)
    }

    fn submit(
        &mut self,
        host: &Host,
        handle: &ComponentHandle<Self>,
    ) -> Result<Handled, FormError> {
        // Every field is validated so every error slot is refreshed, even after the
        // first failure.
        let mut invalid = Vec::new();
        for field in Field::ALL {
            if !self.validate_field(host, field)?.valid {
                invalid.push(field);
            }
        }

        let handled = Handled::new().prevent_default();
        if !invalid.is_empty() {
            info!(?invalid, "Submission rejected");
            self.last_submission = Some(Submission::Rejected { invalid });
            return Ok(handled);
        }

        self.accepted = self.accepted.wrapping_add(1);
        self.show_acknowledgment(host, handle)?;
        self.reset(host)?;
        self.last_submission = Some(Submission::Accepted);
        info!(accepted = self.accepted, "Submission accepted");
        Ok(handled)
    }

    fn show_acknowledgment(
        &mut self,
        host: &Host,
        handle: &ComponentHandle<Self>,
    ) -> Result<(), FormError> {
        let success = self.bindings()?.success;
        host.dom.write(|doc| doc.set_hidden(success, false));
        self.acknowledgment_visible = true;

        if let Some(task) = self.pending_hide.take() {
            debug!("Replacing pending acknowledgment timer");
            task.cancel();
        }
        self.pending_hide = Some(handle.schedule(
            self.config.acknowledgment_delay(),
            FormEvent::HideAcknowledgment {
                generation: Some(self.accepted),
            },
        ));
        Ok(())
    }

    fn hide_acknowledgment(
        &mut self,
        host: &Host,
        generation: Option<u32>,
    ) -> Result<(), FormError> {
        match generation {
            Some(generation) if generation != self.accepted => {
                debug!(generation, current = self.accepted, "Stale acknowledgment timer ignored");
                return Ok(());
            }
            // The armed timer is the one delivering this event.
            Some(_) => self.pending_hide = None,
            None => {
                if let Some(task) = self.pending_hide.take() {
                    task.cancel();
                }
            }
        }

        let success = self.bindings()?.success;
        host.dom.write(|doc| doc.set_hidden(success, true));
        if self.acknowledgment_visible {
            info!("Acknowledgment hidden");
        }
        self.acknowledgment_visible = false;
        Ok(())
    }

    /// Clears every field value and every error slot.
    fn reset(&mut self, host: &Host) -> Result<(), FormError> {
        let bindings = self.bindings()?.fields.clone();
        host.dom.write(|doc| {
            for binding in &bindings {
                doc.set_value(binding.input, "");
                doc.set_text(binding.error, "");
            }
        });
        for state in self.fields.values_mut() {
            *state = FieldState::default();
        }
        Ok(())
    }
}

#[async_trait]
impl Component for FormValidator {
    type Event = FormEvent;
    type Snapshot = FormSnapshot;
    type Context = Host;
    type Error = FormError;

    /// Resolves the form, the three fields with their error slots and the acknowledgment
    /// element, hides the acknowledgment, then attaches an input listener per field and
    /// a submit listener on the form.
    async fn on_mount(
        &mut self,
        host: &Host,
        handle: &ComponentHandle<Self>,
    ) -> Result<(), FormError> {
        let form = host.require("contact form", &self.config.form_id)?;
        let success = host.require("form acknowledgment", &self.config.success_id)?;
        let mut fields = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let id = self.field_id(field);
            let input = host.require(&format!("{field} input"), id)?;
            let error = host.require(&format!("{field} error"), &self.config.error_id(id))?;
            fields.push(FieldBinding { field, input, error });
        }

        let client = handle.weak_client();
        for binding in &fields {
            let field = binding.field;
            self.subscriptions.push(host.bus.subscribe(
                ListenerTarget::Node(binding.input),
                EventKind::Input,
                ComponentListener::new(client.clone(), move |_: &DomEvent| {
                    FormEvent::FieldInput(field)
                }),
            ));
        }
        self.subscriptions.push(host.bus.subscribe(
            ListenerTarget::Node(form),
            EventKind::Submit,
            ComponentListener::new(client, |_: &DomEvent| FormEvent::SubmitAttempted),
        ));

        host.dom.write(|doc| doc.set_hidden(success, true));
        self.acknowledgment_visible = false;
        self.bindings = Some(Bindings {
            form,
            fields,
            success,
        });
        info!(%form, "Form listeners attached");
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: FormEvent,
        host: &Host,
        handle: &ComponentHandle<Self>,
    ) -> Result<Handled, FormError> {
        match event {
            FormEvent::FieldInput(field) => {
                self.validate_field(host, field)?;
                Ok(Handled::new())
            }
            FormEvent::SubmitAttempted => self.submit(host, handle),
            FormEvent::HideAcknowledgment { generation } => {
                self.hide_acknowledgment(host, generation)?;
                Ok(Handled::new())
            }
        }
    }

    async fn on_unmount(&mut self, _host: &Host) -> Result<(), FormError> {
        if let Some(task) = self.pending_hide.take() {
            task.cancel();
        }
        let detached = self.subscriptions.len();
        self.subscriptions.clear();
        if let Some(bindings) = &self.bindings {
            debug!(form = %bindings.form, detached, "Form listeners detached");
        }
        Ok(())
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            acknowledgment_visible: self.acknowledgment_visible,
            hide_pending: self.pending_hide.as_ref().is_some_and(|task| !task.is_finished()),
            last_submission: self.last_submission.clone(),
            accepted_count: self.accepted,
        }
    }
}
