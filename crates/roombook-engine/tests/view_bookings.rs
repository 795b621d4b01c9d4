//! Bookings view tests. These live as integration tests (not unit tests)
//! because `roombook-testing`'s `FakeGateway` implements the gateway traits
//! of the `roombook-engine` library crate; a unit-test build of the engine is
//! a separate compilation unit whose traits would not unify with that impl.

use roombook_engine::{
    BookingGateway, BookingListView, BookingQuery, Confirmation, DeleteOutcome, LoadState,
    StatusAction, TransitionOutcome,
};
use roombook_testing::{fixtures, FakeGateway};
use roombook_types::{BookingStatus, Error, NormalizedStatus, StatusValue};

fn ready_view(gateway: &FakeGateway) -> BookingListView {
    let mut view = BookingListView::new();
    view.fetch(gateway).unwrap();
    gateway.clear_calls();
    view
}

#[test]
fn test_fetch_populates_bookings_and_rooms() {
    let gateway = FakeGateway::seeded();
    let mut view = BookingListView::new();
    view.fetch(&gateway).unwrap();

    assert_eq!(*view.state(), LoadState::Ready);
    assert_eq!(view.bookings().len(), 3);
    assert_eq!(view.rooms().len(), 2);
    assert_eq!(gateway.calls(), vec!["list_bookings", "list_rooms"]);
}

#[test]
fn test_fetch_failure_is_generic() {
    let gateway = FakeGateway::seeded();
    gateway.fail_next(Error::Timeout);

    let mut view = BookingListView::new();
    assert!(view.fetch(&gateway).is_err());
    assert_eq!(
        *view.state(),
        LoadState::Failed("Failed to fetch bookings / rooms.".to_string())
    );
}

#[test]
fn test_room_name_resolution_order() {
    let gateway = FakeGateway::seeded();
    let view = ready_view(&gateway);

    // Booking 1 carries its own roomName
    let own = view.booking(fixtures::pending_booking().id).unwrap();
    assert_eq!(view.room_name(own), "Lab A");

    // Booking 3 has no roomName; resolved via the fetched rooms
    let resolved = view.booking(fixtures::rejected_booking().id).unwrap();
    assert_eq!(view.room_name(resolved), "Hall B");

    // Unknown room id falls back to a placeholder
    let mut orphan = resolved.clone();
    orphan.room_id = roombook_types::RoomId::new(99);
    assert_eq!(view.room_name(&orphan), "Room #99");
}

#[test]
fn test_transitions_offered_only_for_pending() {
    let gateway = FakeGateway::seeded();
    let view = ready_view(&gateway);

    let pending = view.booking(fixtures::pending_booking().id).unwrap();
    assert!(view.row_actions(pending).offer_transitions);

    let approved = view.booking(fixtures::approved_booking().id).unwrap();
    assert!(!view.row_actions(approved).offer_transitions);
}

#[test]
fn test_legacy_numeric_pending_offers_transitions() {
    let gateway = FakeGateway::seeded();
    let mut legacy = fixtures::pending_booking();
    legacy.status = StatusValue::Text("0".to_string());
    gateway.put_booking(legacy.clone());

    let view = ready_view(&gateway);
    let row = view.booking(legacy.id).unwrap();
    assert_eq!(row.status.normalized(), NormalizedStatus::Pending);
    assert!(view.row_actions(row).offer_transitions);
}

#[test]
fn test_approve_issues_one_call_then_refetches() {
    let gateway = FakeGateway::seeded();
    let mut view = ready_view(&gateway);

    let id = fixtures::pending_booking().id;
    let outcome = view.transition(&gateway, id, StatusAction::Approve).unwrap();
    assert_eq!(outcome, TransitionOutcome::Applied);
    assert_eq!(
        gateway.calls(),
        vec![
            "update_booking_status:1:Approved",
            "list_bookings",
            "list_rooms"
        ]
    );

    let updated = view.booking(id).unwrap();
    assert_eq!(updated.status.normalized(), NormalizedStatus::Approved);
    assert!(!view.row_actions(updated).offer_transitions);
}

#[test]
fn test_second_click_while_in_flight_is_noop() {
    let gateway = FakeGateway::seeded();
    let mut view = ready_view(&gateway);
    let id = fixtures::pending_booking().id;

    // First click commits and sets the marker
    let first = view.begin_transition(id, StatusAction::Approve);
    assert!(first.is_some());

    // Second rapid click: ignored, not queued
    assert!(view.begin_transition(id, StatusAction::Approve).is_none());
    assert!(view.begin_transition(id, StatusAction::Reject).is_none());

    // Controls for that row are disabled; other rows stay interactive
    let row = view.booking(id).unwrap().clone();
    assert!(!view.row_actions(&row).transitions_enabled);
    let other = view.booking(fixtures::approved_booking().id).unwrap().clone();
    assert!(view.row_actions(&other).transitions_enabled);

    // Exactly one network call results from the two clicks
    let request = first.unwrap();
    let result = gateway.update_booking_status(request.id, request.next);
    assert_eq!(gateway.calls().len(), 1);
    view.finish_transition(&gateway, id, result).unwrap();
}

#[test]
fn test_transition_on_non_pending_is_noop() {
    let gateway = FakeGateway::seeded();
    let mut view = ready_view(&gateway);

    let id = fixtures::approved_booking().id;
    let outcome = view.transition(&gateway, id, StatusAction::Reject).unwrap();
    assert_eq!(outcome, TransitionOutcome::NoOp);
    assert!(gateway.calls().is_empty());
}

#[test]
fn test_failed_transition_clears_marker_and_keeps_state() {
    let gateway = FakeGateway::seeded();
    let mut view = ready_view(&gateway);
    let id = fixtures::pending_booking().id;

    gateway.fail_next(Error::Api(roombook_types::ApiFailure::from_message(
        "Room is already booked",
    )));
    let err = view
        .transition(&gateway, id, StatusAction::Approve)
        .unwrap_err();
    assert_eq!(err.user_message(), "Room is already booked");

    // No local state change assumed; marker cleared so retry is allowed
    let row = view.booking(id).unwrap().clone();
    assert_eq!(row.status.normalized(), NormalizedStatus::Pending);
    assert!(view.row_actions(&row).transitions_enabled);

    let retry = view.transition(&gateway, id, StatusAction::Approve).unwrap();
    assert_eq!(retry, TransitionOutcome::Applied);
}

#[test]
fn test_declined_delete_is_inert() {
    let gateway = FakeGateway::seeded();
    let mut view = ready_view(&gateway);

    let outcome = view
        .delete(&gateway, fixtures::pending_booking().id, Confirmation::Declined)
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert!(gateway.calls().is_empty());
    assert_eq!(view.bookings().len(), 3);
}

#[test]
fn test_confirmed_delete_refetches() {
    let gateway = FakeGateway::seeded();
    let mut view = ready_view(&gateway);

    let id = fixtures::approved_booking().id;
    let outcome = view.delete(&gateway, id, Confirmation::Confirmed).unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(
        gateway.calls(),
        vec!["delete_booking:2", "list_bookings", "list_rooms"]
    );
    assert!(view.booking(id).is_none());
    assert_eq!(view.bookings().len(), 2);
}

#[test]
fn test_delete_allowed_in_any_state() {
    let gateway = FakeGateway::seeded();
    let mut view = ready_view(&gateway);

    for id in [
        fixtures::pending_booking().id,
        fixtures::approved_booking().id,
        fixtures::rejected_booking().id,
    ] {
        let outcome = view.delete(&gateway, id, Confirmation::Confirmed).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
    }
    assert!(view.bookings().is_empty());
}

#[test]
fn test_query_is_delegated_and_survives_refetch() {
    let gateway = FakeGateway::seeded();
    let mut view = BookingListView::new();
    view.set_query(BookingQuery::ByStatus(BookingStatus::Pending));
    view.fetch(&gateway).unwrap();

    assert_eq!(
        gateway.calls(),
        vec!["list_bookings_by_status:Pending", "list_rooms"]
    );
    assert_eq!(view.bookings().len(), 1);
    gateway.clear_calls();

    // A mutation refetches with the same query
    let id = fixtures::pending_booking().id;
    view.transition(&gateway, id, StatusAction::Approve).unwrap();
    assert_eq!(
        gateway.calls(),
        vec![
            "update_booking_status:1:Approved",
            "list_bookings_by_status:Pending",
            "list_rooms"
        ]
    );
    // The newly approved booking no longer matches the pending query
    assert!(view.bookings().is_empty());
}

#[test]
fn test_manual_status_override_via_gateway() {
    // Edit-Booking allows overriding status in any state; the view only
    // needs to reflect it after a refetch.
    let gateway = FakeGateway::seeded();
    let mut view = ready_view(&gateway);

    let id = fixtures::rejected_booking().id;
    gateway
        .update_booking_status(id, BookingStatus::Pending)
        .unwrap();
    view.fetch(&gateway).unwrap();

    let row = view.booking(id).unwrap();
    assert!(view.row_actions(row).offer_transitions);
}
