use super::MenuError;
use crate::config::MenuConfig;
use crate::dom::{
    ComponentListener, DomEvent, EventKind, Host, ListenerTarget, NodeId, Subscription,
};
use crate::model::{MenuEvent, MenuState};
use async_trait::async_trait;
use component_framework::{Component, ComponentHandle, Handled};
use tracing::{debug, info};

/// Controller for the collapsible navigation panel.
///
/// Owns the open/closed state and mirrors it onto the panel's open class. The panel
/// starts closed.
pub struct MenuController {
    config: MenuConfig,
    state: MenuState,
    nav: Option<NodeId>,
    subscriptions: Vec<Subscription>,
}

impl MenuController {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            state: MenuState::default(),
            nav: None,
            subscriptions: Vec::new(),
        }
    }

    fn render(&self, host: &Host) {
        if let Some(nav) = self.nav {
            let open_class = &self.config.open_class;
            let is_open = self.state.is_open;
            host.dom.write(|doc| doc.set_class(nav, open_class, is_open));
        }
    }

    fn close(&mut self, host: &Host) {
        self.state.is_open = false;
        self.render(host);
    }
}

#[async_trait]
impl Component for MenuController {
    type Event = MenuEvent;
    type Snapshot = MenuState;
    type Context = Host;
    type Error = MenuError;

    /// Resolves the toggle and the panel, then attaches one listener to the toggle, one
    /// per link inside the panel and one on the document.
    ///
    /// Both elements are resolved before anything is attached, so a missing element
    /// leaves the page untouched.
    async fn on_mount(
        &mut self,
        host: &Host,
        handle: &ComponentHandle<Self>,
    ) -> Result<(), MenuError> {
        let toggle = host.require("menu toggle", &self.config.toggle_id)?;
        let nav = host.require("navigation panel", &self.config.nav_id)?;
        let links = host.dom.read(|doc| doc.query_tag(nav, &self.config.link_tag));

        let client = handle.weak_client();
        self.subscriptions.push(host.bus.subscribe(
            ListenerTarget::Node(toggle),
            EventKind::Click,
            ComponentListener::new(client.clone(), |_: &DomEvent| MenuEvent::ToggleActivated),
        ));
        for (index, link) in links.iter().copied().enumerate() {
            self.subscriptions.push(host.bus.subscribe(
                ListenerTarget::Node(link),
                EventKind::Click,
                ComponentListener::new(client.clone(), move |_: &DomEvent| {
                    MenuEvent::LinkActivated { index }
                }),
            ));
        }
        self.subscriptions.push(host.bus.subscribe(
            ListenerTarget::Document,
            EventKind::Click,
            ComponentListener::new(client, |event: &DomEvent| MenuEvent::OutsideActivated {
                target: event.target,
            }),
        ));

        self.nav = Some(nav);
        self.render(host);
        info!(%toggle, %nav, links = links.len(), "Menu listeners attached");
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: MenuEvent,
        host: &Host,
        _handle: &ComponentHandle<Self>,
    ) -> Result<Handled, MenuError> {
        match event {
            MenuEvent::ToggleActivated => {
                self.state.is_open = !self.state.is_open;
                self.render(host);
                info!(is_open = self.state.is_open, "Menu toggled");
                // The activation must not reach the document listener, which would
                // close the panel again.
                Ok(Handled::new().stop_propagation().prevent_default())
            }
            MenuEvent::LinkActivated { index } => {
                debug!(index, "Link activated");
                if self.state.is_open {
                    info!("Menu closed by link");
                }
                self.close(host);
                Ok(Handled::new())
            }
            MenuEvent::OutsideActivated { target } => {
                let region_class = &self.config.region_class;
                let inside = host
                    .dom
                    .read(|doc| doc.closest_with_class(target, region_class).is_some());
                if !inside && self.state.is_open {
                    info!(%target, "Menu closed by outside click");
                    self.close(host);
                }
                Ok(Handled::new())
            }
        }
    }

    async fn on_unmount(&mut self, _host: &Host) -> Result<(), MenuError> {
        let detached = self.subscriptions.len();
        self.subscriptions.clear();
        debug!(detached, "Menu listeners detached");
        Ok(())
    }

    fn snapshot(&self) -> MenuState {
        self.state
    }
}
