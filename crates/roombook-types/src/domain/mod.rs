pub mod booking;
pub mod room;

pub use booking::*;
pub use room::*;
