//! roombook-api: the remote data gateway.
//!
//! A thin, stateless typed wrapper issuing read/create/update/delete calls
//! for Rooms and RoomBookings against a base endpoint. No retries, no
//! caching; a fixed request timeout is the only fallback.

pub mod client;
pub mod error_body;

pub use client::{ApiClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
