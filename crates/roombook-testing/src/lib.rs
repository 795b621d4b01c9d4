//! Testing infrastructure for roombook tests.
//!
//! - `FakeGateway`: in-memory gateway implementation that records calls and
//!   can be scripted to fail
//! - `fixtures`: canonical sample rooms and bookings shared across tests

pub mod fixtures;
pub mod gateway;

pub use gateway::FakeGateway;
