pub mod booking_delete;
pub mod booking_list;
pub mod booking_save;
pub mod booking_show;
pub mod booking_status;
pub mod config;
pub mod room_delete;
pub mod room_list;
pub mod room_save;
pub mod room_show;
