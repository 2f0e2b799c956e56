use component_framework::{ControllerClient, Mounted};
use page_controls::clients::MenuClient;
use page_controls::config::MenuConfig;
use page_controls::dom::sample::{course_site, CourseSite};
use page_controls::dom::{DomEvent, Document, Element, EventKind, Host, ListenerTarget};
use page_controls::menu_controller::{self, MenuError};

/// Real menu actor against the sample page, not yet initialized.
fn start() -> (CourseSite, Host, MenuClient) {
    let site = course_site();
    let host = Host::new(site.document.clone());
    let (actor, client) = menu_controller::new(MenuConfig::default());
    tokio::spawn(actor.run(host.clone()));
    (site, host, client)
}

fn marker(host: &Host, site: &CourseSite) -> bool {
    host.dom.read(|doc| doc.has_class(site.nav, "show"))
}

#[tokio::test]
async fn test_toggle_flips_state_and_marker() {
    let (site, host, client) = start();
    client.initialize().await.unwrap();

    assert!(!client.is_open().await.unwrap());
    assert!(!marker(&host, &site));

    let handled = client.toggle_activated().await.unwrap();
    assert!(handled.propagation_stopped);
    assert!(handled.default_prevented);
    assert!(client.is_open().await.unwrap());
    assert!(marker(&host, &site));

    client.toggle_activated().await.unwrap();
    assert!(!client.is_open().await.unwrap());
    assert!(!marker(&host, &site));
}

#[tokio::test]
async fn test_double_initialization_attaches_listeners_once() {
    let (site, host, client) = start();

    assert_eq!(client.initialize().await.unwrap(), Mounted::Initialized);
    assert_eq!(client.initialize().await.unwrap(), Mounted::AlreadyInitialized);

    // toggle + one per link + document
    assert_eq!(host.bus.listener_count(), 1 + site.links.len() + 1);
    assert_eq!(
        host.bus
            .listeners_on(ListenerTarget::Node(site.toggle), EventKind::Click),
        1
    );

    // A single toggle listener means one click opens the panel instead of flipping twice
    host.bus.dispatch(&host.dom, DomEvent::click(site.toggle)).await;
    assert!(client.is_open().await.unwrap());
}

#[tokio::test]
async fn test_toggle_click_is_not_seen_by_document_listener() {
    let (site, host, client) = start();
    client.initialize().await.unwrap();

    let outcome = host.bus.dispatch(&host.dom, DomEvent::click(site.toggle)).await;
    assert_eq!(outcome.delivered, 1);
    assert!(outcome.propagation_stopped);
    assert!(outcome.default_prevented);
    assert!(client.is_open().await.unwrap());
}

#[tokio::test]
async fn test_link_activation_closes_menu() {
    let (site, host, client) = start();
    client.initialize().await.unwrap();

    client.toggle_activated().await.unwrap();
    let outcome = host.bus.dispatch(&host.dom, DomEvent::click(site.links[3])).await;
    assert!(outcome.failures.is_empty());
    // link listener, then the document listener on the way up
    assert_eq!(outcome.delivered, 2);
    assert!(!client.is_open().await.unwrap());
    assert!(!marker(&host, &site));

    // Closed stays closed
    client.link_activated(0).await.unwrap();
    assert!(!client.is_open().await.unwrap());
}

#[tokio::test]
async fn test_outside_click_closes_only_outside_navbar() {
    let (site, host, client) = start();
    client.initialize().await.unwrap();
    client.toggle_activated().await.unwrap();

    // The logo is inside the navigation region
    host.bus.dispatch(&host.dom, DomEvent::click(site.logo)).await;
    assert!(client.is_open().await.unwrap());

    host.bus.dispatch(&host.dom, DomEvent::click(site.course_card)).await;
    assert!(!client.is_open().await.unwrap());
    assert!(!marker(&host, &site));

    // Outside clicks on a closed menu change nothing
    client.outside_activated(site.course_card).await.unwrap();
    assert!(!client.is_open().await.unwrap());
}

#[tokio::test]
async fn test_missing_toggle_aborts_initialization() {
    let mut doc = Document::new();
    let navbar = doc.append(doc.body(), Element::new("header").with_class("navbar"));
    doc.append(navbar, Element::new("ul").with_id("navLinks"));
    let host = Host::new(doc);

    let (actor, client) = menu_controller::new(MenuConfig::default());
    tokio::spawn(actor.run(host.clone()));

    match client.initialize().await {
        Err(MenuError::MissingElement(e)) => assert_eq!(e.id, "menuToggle"),
        other => panic!("expected missing toggle, got {other:?}"),
    }
    assert_eq!(host.bus.listener_count(), 0);

    // Not marked initialized: events are still rejected and a retry runs again
    assert!(matches!(
        client.toggle_activated().await,
        Err(MenuError::ActorCommunicationError(_))
    ));
    assert!(client.initialize().await.is_err());
    assert_eq!(host.bus.listener_count(), 0);
}

#[tokio::test]
async fn test_missing_panel_aborts_initialization() {
    let mut doc = Document::new();
    let navbar = doc.append(doc.body(), Element::new("header").with_class("navbar"));
    doc.append(navbar, Element::new("button").with_id("menuToggle"));
    let host = Host::new(doc);

    let (actor, client) = menu_controller::new(MenuConfig::default());
    tokio::spawn(actor.run(host.clone()));

    match client.initialize().await {
        Err(MenuError::MissingElement(e)) => assert_eq!(e.id, "navLinks"),
        other => panic!("expected missing panel, got {other:?}"),
    }
    assert_eq!(host.bus.listener_count(), 0);
}

#[tokio::test]
async fn test_initialization_clears_stale_marker() {
    let site = course_site();
    let mut document = site.document.clone();
    document.add_class(site.nav, "show");
    let host = Host::new(document);

    let (actor, client) = menu_controller::new(MenuConfig::default());
    tokio::spawn(actor.run(host.clone()));
    client.initialize().await.unwrap();

    assert!(!host.dom.read(|doc| doc.has_class(site.nav, "show")));
}

#[tokio::test]
async fn test_custom_classes_from_config() {
    let site = course_site();
    let host = Host::new(site.document.clone());
    let config = MenuConfig {
        open_class: "is-open".into(),
        ..MenuConfig::default()
    };
    let (actor, client) = menu_controller::new(config);
    tokio::spawn(actor.run(host.clone()));
    client.initialize().await.unwrap();

    client.toggle_activated().await.unwrap();
    host.dom.read(|doc| {
        assert!(doc.has_class(site.nav, "is-open"));
        assert!(!doc.has_class(site.nav, "show"));
    });
}

#[tokio::test]
async fn test_teardown_detaches_listeners_and_allows_reinitialization() {
    let (site, host, client) = start();
    client.initialize().await.unwrap();
    client.toggle_activated().await.unwrap();

    client.teardown().await.unwrap();
    assert_eq!(host.bus.listener_count(), 0);

    let outcome = host.bus.dispatch(&host.dom, DomEvent::click(site.toggle)).await;
    assert_eq!(outcome.delivered, 0);

    assert_eq!(client.initialize().await.unwrap(), Mounted::Initialized);
    assert_eq!(host.bus.listener_count(), 1 + site.links.len() + 1);
}
