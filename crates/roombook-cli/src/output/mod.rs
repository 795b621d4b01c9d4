mod tables;

pub use tables::{print_booking, print_bookings, print_room, print_rooms};
