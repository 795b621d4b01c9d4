//! Room list view tests. These live as integration tests (not unit tests)
//! because `roombook-testing`'s `FakeGateway` implements the gateway traits
//! of the `roombook-engine` library crate; a unit-test build of the engine is
//! a separate compilation unit whose traits would not unify with that impl.

use roombook_engine::{Confirmation, DeleteOutcome, LoadState, RoomFilter, RoomListView};
use roombook_testing::{fixtures, FakeGateway};
use roombook_types::Error;
use std::time::{Duration, Instant};

#[test]
fn test_fetch_populates_rooms_and_enters_ready() {
    let gateway = FakeGateway::seeded();
    let mut view = RoomListView::new();
    assert_eq!(*view.state(), LoadState::Idle);

    view.fetch(&gateway).unwrap();
    assert_eq!(*view.state(), LoadState::Ready);
    assert_eq!(view.rooms().len(), 2);
}

#[test]
fn test_fetch_failure_enters_failed_with_generic_message() {
    let gateway = FakeGateway::seeded();
    gateway.fail_next(Error::Network("connection refused".to_string()));

    let mut view = RoomListView::new();
    let err = view.fetch(&gateway).unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    // The displayed message must not leak transport detail
    assert_eq!(
        *view.state(),
        LoadState::Failed("Failed to fetch rooms.".to_string())
    );
}

#[test]
fn test_scenario_keyword_and_active_filters() {
    let gateway = FakeGateway::seeded();
    let mut view = RoomListView::new();
    view.fetch(&gateway).unwrap();

    view.set_filter(RoomFilter {
        keyword: "lab".to_string(),
        ..RoomFilter::default()
    });
    let visible = view.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, fixtures::lab_a().id);

    view.set_filter(RoomFilter {
        is_active: Some(false),
        ..RoomFilter::default()
    });
    let visible = view.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, fixtures::hall_b().id);
}

#[test]
fn test_keyword_debounce_applies_final_input() {
    let gateway = FakeGateway::seeded();
    let mut view = RoomListView::new();
    view.fetch(&gateway).unwrap();

    let t0 = Instant::now();
    view.type_keyword("h", t0);
    view.type_keyword("hall", t0 + Duration::from_millis(100));

    assert!(!view.poll_keyword(t0 + Duration::from_millis(200)));
    assert_eq!(view.filter().keyword, "");

    assert!(view.poll_keyword(t0 + Duration::from_millis(400)));
    assert_eq!(view.filter().keyword, "hall");
    assert_eq!(view.visible().len(), 1);
}

#[test]
fn test_declined_delete_issues_no_network_call() {
    let gateway = FakeGateway::seeded();
    let mut view = RoomListView::new();
    view.fetch(&gateway).unwrap();
    gateway.clear_calls();

    let outcome = view
        .delete(&gateway, fixtures::lab_a().id, Confirmation::Declined)
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert!(gateway.calls().is_empty());
    assert_eq!(view.rooms().len(), 2);
}

#[test]
fn test_confirmed_delete_removes_room_and_refetches() {
    let gateway = FakeGateway::seeded();
    let mut view = RoomListView::new();
    view.fetch(&gateway).unwrap();
    gateway.clear_calls();

    let outcome = view
        .delete(&gateway, fixtures::lab_a().id, Confirmation::Confirmed)
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(gateway.calls(), vec!["delete_room:1", "list_rooms"]);
    assert_eq!(view.rooms().len(), 1);
    assert_eq!(*view.state(), LoadState::Ready);
}

#[test]
fn test_failed_delete_leaves_list_unchanged() {
    let gateway = FakeGateway::seeded();
    let mut view = RoomListView::new();
    view.fetch(&gateway).unwrap();
    gateway.fail_next(Error::NotFound("room 1".to_string()));

    let err = view
        .delete(&gateway, fixtures::lab_a().id, Confirmation::Confirmed)
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(view.rooms().len(), 2);
    assert_eq!(*view.state(), LoadState::Ready);
}

#[test]
fn test_reset_filter_restores_full_list() {
    let gateway = FakeGateway::seeded();
    let mut view = RoomListView::new();
    view.fetch(&gateway).unwrap();

    view.set_filter(RoomFilter {
        keyword: "lab".to_string(),
        is_active: Some(true),
        room_id: None,
    });
    assert_eq!(view.visible().len(), 1);

    view.reset_filter();
    assert_eq!(view.visible().len(), 2);
}
