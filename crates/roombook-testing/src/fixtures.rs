//! Canonical sample data used across engine and CLI tests.

use chrono::{TimeZone, Utc};
use roombook_types::{Booking, BookingId, Room, RoomId, StatusValue};

pub fn lab_a() -> Room {
    Room {
        id: RoomId::new(1),
        name: "Lab A".to_string(),
        location: "Building X".to_string(),
        capacity: 20,
        is_active: true,
    }
}

pub fn hall_b() -> Room {
    Room {
        id: RoomId::new(2),
        name: "Hall B".to_string(),
        location: "Building Y".to_string(),
        capacity: 50,
        is_active: false,
    }
}

pub fn sample_rooms() -> Vec<Room> {
    vec![lab_a(), hall_b()]
}

/// Pending booking for Lab A, with the room name denormalized on the booking.
pub fn pending_booking() -> Booking {
    Booking {
        id: BookingId::new(1),
        room_id: RoomId::new(1),
        room_name: Some("Lab A".to_string()),
        booker_name: "Salma".to_string(),
        purpose_of_booking: "Team meeting".to_string(),
        start_time: Utc.with_ymd_and_hms(2026, 2, 15, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2026, 2, 15, 11, 0, 0).unwrap(),
        status: StatusValue::Text("Pending".to_string()),
    }
}

pub fn approved_booking() -> Booking {
    Booking {
        id: BookingId::new(2),
        room_id: RoomId::new(1),
        room_name: Some("Lab A".to_string()),
        booker_name: "Rizky".to_string(),
        purpose_of_booking: "Thesis defense".to_string(),
        start_time: Utc.with_ymd_and_hms(2026, 2, 16, 13, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2026, 2, 16, 15, 0, 0).unwrap(),
        status: StatusValue::Text("Approved".to_string()),
    }
}

/// Rejected booking for Hall B, without a denormalized room name.
pub fn rejected_booking() -> Booking {
    Booking {
        id: BookingId::new(3),
        room_id: RoomId::new(2),
        room_name: None,
        booker_name: "Dewi".to_string(),
        purpose_of_booking: "Club rehearsal".to_string(),
        start_time: Utc.with_ymd_and_hms(2026, 2, 17, 18, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2026, 2, 17, 20, 0, 0).unwrap(),
        status: StatusValue::Text("Rejected".to_string()),
    }
}

pub fn sample_bookings() -> Vec<Booking> {
    vec![pending_booking(), approved_booking(), rejected_booking()]
}
