use super::Diagnostics;
use crate::clients::{FormClient, MenuClient};
use crate::config::PageConfig;
use crate::dom::{DispatchOutcome, DomEvent, DomHandle, Document, Element, Host, NodeId};
use crate::form_validator::FormError;
use crate::menu_controller::MenuError;
use component_framework::{ControllerClient, Mounted};
use tracing::{error, info, warn};

/// Page lifecycle signals from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The document has been parsed.
    DomContentLoaded,
    /// All resources have finished loading.
    Load,
}

/// What each controller reported for one lifecycle signal.
#[derive(Debug, Clone, PartialEq)]
pub struct InitReport {
    pub menu: Result<Mounted, MenuError>,
    /// `None` when the signal does not initialize the form.
    pub form: Option<Result<Mounted, FormError>>,
}

/// The runtime orchestrator for one page.
///
/// `Page` is responsible for:
/// - **Lifecycle Management**: starting the controller actors and stopping them again
/// - **Host Wiring**: handing every controller the shared document and event bus
/// - **Event Delivery**: feeding clicks, edits and submissions through the event bus and
///   reporting handler failures on the page
///
/// # Example
///
/// ```ignore
/// let site = course_site();
/// let page = Page::new(site.document, PageConfig::default());
///
/// page.lifecycle(LifecycleEvent::DomContentLoaded).await;
/// page.click(site.toggle).await;
/// assert!(page.menu_client.is_open().await?);
///
/// page.shutdown().await?;
/// ```
pub struct Page {
    /// Client for the navigation menu actor
    pub menu_client: MenuClient,

    /// Client for the contact form actor
    pub form_client: FormClient,

    host: Host,
    diagnostics: Diagnostics,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Page {
    /// Spawns the menu and form actors against `document`. Nothing is attached to the
    /// document until a lifecycle signal arrives.
    pub fn new(document: Document, config: PageConfig) -> Self {
        let host = Host::new(document);

        // 1. Create actors
        let (menu_actor, menu_client) = crate::menu_controller::new(config.menu);
        let (form_actor, form_client) = crate::form_validator::new(config.form);

        // 2. Start actors with the shared host as context
        let menu_handle = tokio::spawn(menu_actor.run(host.clone()));
        let form_handle = tokio::spawn(form_actor.run(host.clone()));

        Self {
            menu_client,
            form_client,
            host,
            diagnostics: Diagnostics::new(),
            handles: vec![menu_handle, form_handle],
        }
    }

    pub fn dom(&self) -> &DomHandle {
        &self.host.dom
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Initializes the controllers for `event`.
    ///
    /// The menu is initialized on both signals; whichever arrives second is a no-op. The
    /// form is wired once, when the document is parsed. A controller that fails to
    /// initialize leaves the other one unaffected.
    pub async fn lifecycle(&self, event: LifecycleEvent) -> InitReport {
        info!(?event, "Lifecycle signal");

        let menu = self.menu_client.initialize().await;
        if let Err(e) = &menu {
            error!(error = %e, "Menu initialization failed");
        }

        let form = match event {
            LifecycleEvent::DomContentLoaded => {
                let form = self.form_client.initialize().await;
                if let Err(e) = &form {
                    error!(error = %e, "Form initialization failed");
                }
                Some(form)
            }
            LifecycleEvent::Load => None,
        };

        InitReport { menu, form }
    }

    /// Delivers a click on `target`.
    ///
    /// A click on a submit control inside a form that no listener prevented goes on to
    /// submit that form.
    pub async fn click(&self, target: NodeId) -> DispatchOutcome {
        let outcome = self.dispatch(DomEvent::click(target)).await;
        if outcome.default_prevented {
            return outcome;
        }

        let form = self.host.dom.read(|doc| {
            let submits = doc.element(target).is_some_and(Element::is_submit_control);
            submits.then(|| doc.closest_with_tag(target, "form")).flatten()
        });
        if let Some(form) = form {
            self.submit(form).await;
        }
        outcome
    }

    /// Sets the value of `target` and delivers an input event on it.
    pub async fn input(&self, target: NodeId, value: impl Into<String>) -> DispatchOutcome {
        let value = value.into();
        self.host.dom.write(|doc| doc.set_value(target, value));
        self.dispatch(DomEvent::input(target)).await
    }

    /// Delivers a submit event on `form`.
    pub async fn submit(&self, form: NodeId) -> DispatchOutcome {
        self.dispatch(DomEvent::submit(form)).await
    }

    async fn dispatch(&self, event: DomEvent) -> DispatchOutcome {
        let outcome = self.host.bus.dispatch(&self.host.dom, event).await;
        for failure in &outcome.failures {
            self.diagnostics.report(&self.host.dom, failure);
        }
        outcome
    }

    /// Detaches every controller's listeners while keeping the actors running.
    pub async fn teardown(&self) {
        if let Err(e) = self.menu_client.teardown().await {
            warn!(error = %e, "Menu teardown failed");
        }
        if let Err(e) = self.form_client.teardown().await {
            warn!(error = %e, "Form teardown failed");
        }
    }

    /// Gracefully shuts down the page.
    ///
    /// Dropping the clients closes the actors' channels; each actor unmounts its
    /// controller, which detaches its listeners, and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down page...");

        drop(self.menu_client);
        drop(self.form_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!(listeners = self.host.bus.listener_count(), "Page shutdown complete.");
        Ok(())
    }
}
