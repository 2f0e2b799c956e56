use async_trait::async_trait;
use component_framework::mock::MockClient;
use component_framework::{FrameworkError, Handled};
use page_controls::dom::{
    ComponentListener, DomEvent, DomHandle, Document, Element, EventBus, EventKind, Listener,
    ListenerTarget, NodeId,
};
use page_controls::menu_controller::MenuController;
use page_controls::model::MenuEvent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// body > outer > middle > inner
fn nested() -> (DomHandle, NodeId, NodeId, NodeId) {
    let mut doc = Document::new();
    let outer = doc.append(doc.body(), Element::new("div").with_class("outer"));
    let middle = doc.append(outer, Element::new("div").with_class("middle"));
    let inner = doc.append(middle, Element::new("span").with_class("inner"));
    (DomHandle::new(doc), outer, middle, inner)
}

fn link_listener(
    mock: &MockClient<MenuController>,
    index: usize,
) -> ComponentListener<MenuController, impl Fn(&DomEvent) -> MenuEvent + Send + Sync + 'static> {
    ComponentListener::new(mock.client().downgrade(), move |_: &DomEvent| {
        MenuEvent::LinkActivated { index }
    })
}

/// Counts calls and answers with a fixed result.
struct Recorder {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait]
impl Listener for Recorder {
    async fn handle(&self, _event: &DomEvent) -> Result<Handled, FrameworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(FrameworkError::NotMounted)
        } else {
            Ok(Handled::new())
        }
    }
}

#[tokio::test]
async fn test_bubbles_from_target_to_document_in_order() {
    let (dom, outer, _middle, inner) = nested();
    let bus = EventBus::new();
    let mut mock = MockClient::<MenuController>::new();
    mock.expect_dispatch().return_ok(Handled::new());
    mock.expect_dispatch().return_ok(Handled::new());
    mock.expect_dispatch().return_ok(Handled::new());

    let _document = bus.subscribe(
        ListenerTarget::Document,
        EventKind::Click,
        link_listener(&mock, 2),
    );
    let _outer = bus.subscribe(
        ListenerTarget::Node(outer),
        EventKind::Click,
        link_listener(&mock, 1),
    );
    let _inner = bus.subscribe(
        ListenerTarget::Node(inner),
        EventKind::Click,
        link_listener(&mock, 0),
    );

    let outcome = bus.dispatch(&dom, DomEvent::click(inner)).await;

    assert_eq!(outcome.delivered, 3);
    assert!(!outcome.propagation_stopped);
    assert_eq!(
        mock.received(),
        vec![
            "LinkActivated { index: 0 }".to_string(),
            "LinkActivated { index: 1 }".to_string(),
            "LinkActivated { index: 2 }".to_string(),
        ]
    );
    mock.verify();
}

#[tokio::test]
async fn test_stop_propagation_skips_ancestors_but_not_siblings() {
    let (dom, outer, middle, inner) = nested();
    let bus = EventBus::new();
    let mut mock = MockClient::<MenuController>::new();
    mock.expect_dispatch().return_ok(Handled::new());
    mock.expect_dispatch()
        .return_ok(Handled::new().stop_propagation().prevent_default());
    mock.expect_dispatch().return_ok(Handled::new());

    let _inner = bus.subscribe(
        ListenerTarget::Node(inner),
        EventKind::Click,
        link_listener(&mock, 0),
    );
    let _first = bus.subscribe(
        ListenerTarget::Node(middle),
        EventKind::Click,
        link_listener(&mock, 1),
    );
    let _second = bus.subscribe(
        ListenerTarget::Node(middle),
        EventKind::Click,
        link_listener(&mock, 2),
    );
    let _outer = bus.subscribe(
        ListenerTarget::Node(outer),
        EventKind::Click,
        link_listener(&mock, 3),
    );
    let _document = bus.subscribe(
        ListenerTarget::Document,
        EventKind::Click,
        link_listener(&mock, 4),
    );

    let outcome = bus.dispatch(&dom, DomEvent::click(inner)).await;

    assert_eq!(outcome.delivered, 3);
    assert!(outcome.propagation_stopped);
    assert!(outcome.default_prevented);
    assert_eq!(mock.received().len(), 3);
    mock.verify();
}

#[tokio::test]
async fn test_failing_listener_is_reported_and_dispatch_continues() {
    let (dom, outer, _middle, inner) = nested();
    let bus = EventBus::new();
    let failing = Arc::new(AtomicUsize::new(0));
    let passing = Arc::new(AtomicUsize::new(0));

    let _inner = bus.subscribe(
        ListenerTarget::Node(inner),
        EventKind::Click,
        Recorder {
            calls: failing.clone(),
            fail: true,
        },
    );
    let _outer = bus.subscribe(
        ListenerTarget::Node(outer),
        EventKind::Click,
        Recorder {
            calls: passing.clone(),
            fail: false,
        },
    );

    let outcome = bus.dispatch(&dom, DomEvent::click(inner)).await;

    assert_eq!(outcome.delivered, 2);
    assert_eq!(outcome.failures, vec!["Component is not mounted".to_string()]);
    assert_eq!(failing.load(Ordering::SeqCst), 1);
    assert_eq!(passing.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_listener_for_dropped_component_reports_closed() {
    let (dom, _outer, _middle, inner) = nested();
    let bus = EventBus::new();
    let mock = MockClient::<MenuController>::new();
    let _inner = bus.subscribe(
        ListenerTarget::Node(inner),
        EventKind::Click,
        link_listener(&mock, 0),
    );
    drop(mock);

    let outcome = bus.dispatch(&dom, DomEvent::click(inner)).await;

    assert_eq!(outcome.delivered, 1);
    assert_eq!(outcome.failures, vec!["Actor closed".to_string()]);
}

#[tokio::test]
async fn test_event_kinds_do_not_cross() {
    let (dom, _outer, _middle, inner) = nested();
    let bus = EventBus::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let _input = bus.subscribe(
        ListenerTarget::Node(inner),
        EventKind::Input,
        Recorder {
            calls: calls.clone(),
            fail: false,
        },
    );

    let outcome = bus.dispatch(&dom, DomEvent::click(inner)).await;
    assert_eq!(outcome.delivered, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let outcome = bus.dispatch(&dom, DomEvent::input(inner)).await;
    assert_eq!(outcome.delivered, 1);
}

#[tokio::test]
async fn test_dropping_subscription_detaches_listener() {
    let (dom, _outer, _middle, inner) = nested();
    let bus = EventBus::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let subscription = bus.subscribe(
        ListenerTarget::Document,
        EventKind::Click,
        Recorder {
            calls: calls.clone(),
            fail: false,
        },
    );
    let id = subscription.id();
    assert_eq!(bus.listener_count(), 1);

    subscription.dispose();
    assert_eq!(bus.listener_count(), 0);
    assert!(!bus.unsubscribe(id));

    bus.dispatch(&dom, DomEvent::click(inner)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    {
        let _scoped = bus.subscribe(
            ListenerTarget::Node(inner),
            EventKind::Click,
            Recorder {
                calls: calls.clone(),
                fail: false,
            },
        );
        assert_eq!(bus.listeners_on(ListenerTarget::Node(inner), EventKind::Click), 1);
    }
    assert_eq!(bus.listener_count(), 0);
}
