use component_framework::{ControllerClient, Mounted};
use page_controls::clients::FormClient;
use page_controls::config::FormConfig;
use page_controls::dom::sample::{course_site, CourseSite};
use page_controls::dom::{DispatchOutcome, DomEvent, Host, NodeId};
use page_controls::form_validator::validators::{EMAIL_ERROR, MESSAGE_ERROR, NAME_ERROR};
use page_controls::form_validator::{self, FormError};
use page_controls::model::{Field, Submission};
use std::time::Duration;

/// Real form actor against the sample page, initialized.
async fn start_with(config: FormConfig) -> (CourseSite, Host, FormClient) {
    let site = course_site();
    let host = Host::new(site.document.clone());
    let (actor, client) = form_validator::new(config);
    tokio::spawn(actor.run(host.clone()));
    assert_eq!(client.initialize().await.unwrap(), Mounted::Initialized);
    (site, host, client)
}

async fn start() -> (CourseSite, Host, FormClient) {
    start_with(FormConfig::default()).await
}

async fn type_into(host: &Host, node: NodeId, value: &str) -> DispatchOutcome {
    let value = value.to_string();
    host.dom.write(|doc| doc.set_value(node, value));
    host.bus.dispatch(&host.dom, DomEvent::input(node)).await
}

async fn fill(host: &Host, site: &CourseSite, name: &str, email: &str, message: &str) {
    type_into(host, site.name, name).await;
    type_into(host, site.email, email).await;
    type_into(host, site.message, message).await;
}

async fn submit(host: &Host, site: &CourseSite) -> DispatchOutcome {
    host.bus.dispatch(&host.dom, DomEvent::submit(site.form)).await
}

fn error_text(host: &Host, id: &str) -> String {
    host.dom.read(|doc| {
        doc.get_element_by_id(id)
            .and_then(|node| doc.text(node))
            .unwrap_or_default()
            .to_string()
    })
}

fn acknowledged(host: &Host, site: &CourseSite) -> bool {
    host.dom.read(|doc| !doc.is_hidden(site.success))
}

#[tokio::test]
async fn test_input_validates_only_the_edited_field() {
    let (site, host, client) = start().await;

    type_into(&host, site.name, "Al").await;
    assert_eq!(error_text(&host, "nameError"), NAME_ERROR);
    assert_eq!(error_text(&host, "emailError"), "");

    type_into(&host, site.name, "  Alice ").await;
    assert_eq!(error_text(&host, "nameError"), "");

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.field(Field::Name).value, "  Alice ");
    assert!(snapshot.field(Field::Name).error_message.is_empty());
    assert!(snapshot.last_submission.is_none());
}

#[tokio::test]
async fn test_field_input_returns_field_state() {
    let (site, host, client) = start().await;
    host.dom.write(|doc| doc.set_value(site.email, "A@B.CO"));

    let state = client.field_input(Field::Email).await.unwrap();
    assert_eq!(state.value, "A@B.CO");
    assert_eq!(state.error_message, EMAIL_ERROR);
    assert_eq!(error_text(&host, "emailError"), EMAIL_ERROR);
}

#[tokio::test]
async fn test_rejected_submission_shows_every_error_and_keeps_values() {
    let (site, host, client) = start().await;
    fill(&host, &site, "Al", "not-an-email", "short").await;

    let outcome = submit(&host, &site).await;
    assert!(outcome.default_prevented);
    assert!(outcome.failures.is_empty());

    assert_eq!(error_text(&host, "nameError"), NAME_ERROR);
    assert_eq!(error_text(&host, "emailError"), EMAIL_ERROR);
    assert_eq!(error_text(&host, "messageError"), MESSAGE_ERROR);
    assert!(host.dom.read(|doc| doc.value(site.name) == Some("Al")));
    assert!(!acknowledged(&host, &site));

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(
        snapshot.last_submission,
        Some(Submission::Rejected {
            invalid: vec![Field::Name, Field::Email, Field::Message]
        })
    );
    assert!(!snapshot.hide_pending);
}

#[tokio::test]
async fn test_submit_validates_untouched_fields() {
    let (site, host, client) = start().await;
    type_into(&host, site.name, "Alice").await;

    client.submit_attempted().await.unwrap();

    assert_eq!(error_text(&host, "nameError"), "");
    assert_eq!(error_text(&host, "emailError"), EMAIL_ERROR);
    assert_eq!(error_text(&host, "messageError"), MESSAGE_ERROR);
}

#[tokio::test]
async fn test_submit_revalidates_current_values() {
    let (site, host, client) = start().await;
    fill(&host, &site, "Alice", "alice@example.com", "Hello, is there a weekend class?").await;
    assert!(client.snapshot().await.unwrap().is_clean());

    // Changed without an input event
    host.dom.write(|doc| doc.set_value(site.name, "Al"));
    submit(&host, &site).await;

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(
        snapshot.last_submission,
        Some(Submission::Rejected {
            invalid: vec![Field::Name]
        })
    );
    assert_eq!(error_text(&host, "nameError"), NAME_ERROR);
    assert_eq!(error_text(&host, "emailError"), "");
    assert_eq!(error_text(&host, "messageError"), "");
    assert!(!acknowledged(&host, &site));

    // A rejected submission keeps every value, valid ones included
    host.dom.read(|doc| {
        assert_eq!(doc.value(site.name), Some("Al"));
        assert_eq!(doc.value(site.email), Some("alice@example.com"));
        assert_eq!(doc.value(site.message), Some("Hello, is there a weekend class?"));
    });
    assert_eq!(snapshot.field(Field::Email).value, "alice@example.com");
}

#[tokio::test(start_paused = true)]
async fn test_accepted_submission_resets_and_auto_hides() {
    let (site, host, client) = start().await;
    fill(&host, &site, "Alice", "alice@example.com", "Hello, is there a weekend class?").await;

    let outcome = submit(&host, &site).await;
    assert!(outcome.default_prevented);

    assert!(acknowledged(&host, &site));
    host.dom.read(|doc| {
        assert_eq!(doc.value(site.name), Some(""));
        assert_eq!(doc.value(site.email), Some(""));
        assert_eq!(doc.value(site.message), Some(""));
    });
    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.last_submission, Some(Submission::Accepted));
    assert!(snapshot.acknowledgment_visible);
    assert!(snapshot.hide_pending);
    assert!(snapshot.is_clean());
    assert_eq!(snapshot.field(Field::Message).value, "");

    tokio::time::sleep(Duration::from_millis(3_900)).await;
    assert!(acknowledged(&host, &site));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!acknowledged(&host, &site));
    let snapshot = client.snapshot().await.unwrap();
    assert!(!snapshot.acknowledgment_visible);
    assert!(!snapshot.hide_pending);
}

#[tokio::test(start_paused = true)]
async fn test_second_acceptance_restarts_hide_timer() {
    let (site, host, client) = start().await;
    fill(&host, &site, "Alice", "alice@example.com", "First question about courses").await;
    submit(&host, &site).await;

    tokio::time::sleep(Duration::from_secs(3)).await;
    fill(&host, &site, "Bob", "bob@example.org", "Second question about courses").await;
    submit(&host, &site).await;

    // Past the first timer's deadline
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(acknowledged(&host, &site));

    tokio::time::sleep(Duration::from_millis(2_100)).await;
    assert!(!acknowledged(&host, &site));
    assert_eq!(client.snapshot().await.unwrap().accepted_count, 2);
}

#[tokio::test(start_paused = true)]
async fn test_hide_is_idempotent() {
    let (site, host, client) = start().await;
    fill(&host, &site, "Alice", "alice@example.com", "Hello, is there a weekend class?").await;
    submit(&host, &site).await;

    client.hide_acknowledgment().await.unwrap();
    client.hide_acknowledgment().await.unwrap();
    assert!(!acknowledged(&host, &site));
    assert!(!client.snapshot().await.unwrap().hide_pending);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(!acknowledged(&host, &site));
    assert!(!client.snapshot().await.unwrap().acknowledgment_visible);
}

#[tokio::test(start_paused = true)]
async fn test_acknowledgment_delay_from_config() {
    let config = FormConfig {
        acknowledgment_delay_ms: 1_000,
        ..FormConfig::default()
    };
    let (site, host, _client) = start_with(config).await;
    fill(&host, &site, "Alice", "alice@example.com", "Hello, is there a weekend class?").await;
    submit(&host, &site).await;

    tokio::time::sleep(Duration::from_millis(900)).await;
    assert!(acknowledged(&host, &site));
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!acknowledged(&host, &site));
}

#[tokio::test]
async fn test_initialization_hides_acknowledgment() {
    let site = course_site();
    let mut document = site.document.clone();
    document.set_hidden(site.success, false);
    let host = Host::new(document);

    let (actor, client) = form_validator::new(FormConfig::default());
    tokio::spawn(actor.run(host.clone()));
    client.initialize().await.unwrap();

    assert!(!acknowledged(&host, &site));
}

#[tokio::test]
async fn test_missing_error_slot_aborts_initialization() {
    let site = course_site();
    let host = Host::new(site.document.clone());
    let config = FormConfig {
        error_suffix: "Message".into(),
        ..FormConfig::default()
    };
    let (actor, client) = form_validator::new(config);
    tokio::spawn(actor.run(host.clone()));

    match client.initialize().await {
        Err(FormError::MissingElement(e)) => assert_eq!(e.id, "nameMessage"),
        other => panic!("expected missing error slot, got {other:?}"),
    }
    assert_eq!(host.bus.listener_count(), 0);
}

#[tokio::test]
async fn test_events_before_initialization_are_rejected() {
    let site = course_site();
    let host = Host::new(site.document.clone());
    let (actor, client) = form_validator::new(FormConfig::default());
    tokio::spawn(actor.run(host.clone()));

    assert!(matches!(
        client.submit_attempted().await,
        Err(FormError::ActorCommunicationError(_))
    ));
}
