use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::{RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use roombook_engine::{BookingGateway, BookingQuery, RoomGateway};
use roombook_types::{
    Booking, BookingDraft, BookingId, BookingStatus, Error, Result, Room, RoomDraft, RoomId,
};

use crate::error_body::decode_failure;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5042/api";

/// Fixed request timeout; the only timeout-driven fallback the gateway has.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Stateless request/response relay against the room-booking API.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue the request and map transport/status failures into the shared
    /// taxonomy. No retries.
    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(response.url().path().to_string()));
        }
        let body = response.text().unwrap_or_default();
        Err(decode_failure(status.as_u16(), &body))
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json().map_err(|e| Error::Decode(e.to_string()))
    }

    // ----- Rooms -----

    pub fn rooms(&self) -> Result<Vec<Room>> {
        Self::decode(self.send(self.http.get(self.url("/Rooms")))?)
    }

    pub fn room(&self, id: RoomId) -> Result<Room> {
        Self::decode(self.send(self.http.get(self.url(&format!("/Rooms/{}", id))))?)
    }

    pub fn create_room(&self, draft: &RoomDraft) -> Result<Room> {
        draft.validate()?;
        Self::decode(self.send(self.http.post(self.url("/Rooms")).json(draft))?)
    }

    pub fn update_room(&self, id: RoomId, draft: &RoomDraft) -> Result<Room> {
        draft.validate()?;
        Self::decode(self.send(self.http.put(self.url(&format!("/Rooms/{}", id))).json(draft))?)
    }

    pub fn remove_room(&self, id: RoomId) -> Result<()> {
        self.send(self.http.delete(self.url(&format!("/Rooms/{}", id))))?;
        Ok(())
    }

    // ----- Bookings -----

    pub fn bookings(&self) -> Result<Vec<Booking>> {
        Self::decode(self.send(self.http.get(self.url("/RoomBookings")))?)
    }

    pub fn booking(&self, id: BookingId) -> Result<Booking> {
        Self::decode(self.send(self.http.get(self.url(&format!("/RoomBookings/{}", id))))?)
    }

    pub fn create_booking(&self, draft: &BookingDraft) -> Result<Booking> {
        draft.validate()?;
        Self::decode(self.send(self.http.post(self.url("/RoomBookings")).json(draft))?)
    }

    /// Full-payload update.
    pub fn update_booking(&self, id: BookingId, draft: &BookingDraft) -> Result<Booking> {
        draft.validate()?;
        Self::decode(self.send(
            self.http
                .patch(self.url(&format!("/RoomBookings/{}", id)))
                .json(draft),
        )?)
    }

    /// Status-only update; the body is the bare canonical status text.
    pub fn set_booking_status(&self, id: BookingId, status: BookingStatus) -> Result<Booking> {
        Self::decode(self.send(
            self.http
                .patch(self.url(&format!("/RoomBookings/{}/status", id)))
                .json(&status.as_str()),
        )?)
    }

    pub fn remove_booking(&self, id: BookingId) -> Result<()> {
        self.send(self.http.delete(self.url(&format!("/RoomBookings/{}", id))))?;
        Ok(())
    }

    // ----- Filtered reads (server-delegated) -----

    pub fn bookings_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>> {
        Self::decode(self.send(
            self.http
                .get(self.url("/RoomBookings/by-status"))
                .query(&[("status", status.as_str())]),
        )?)
    }

    pub fn bookings_by_room(&self, room_id: RoomId) -> Result<Vec<Booking>> {
        Self::decode(self.send(
            self.http
                .get(self.url("/RoomBookings/by-room"))
                .query(&[("roomId", room_id.as_i64().to_string())]),
        )?)
    }

    pub fn bookings_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>> {
        Self::decode(self.send(
            self.http
                .get(self.url("/RoomBookings/by-date"))
                .query(&[("date", date.format("%Y-%m-%d").to_string())]),
        )?)
    }
}

impl RoomGateway for ApiClient {
    fn list_rooms(&self) -> Result<Vec<Room>> {
        self.rooms()
    }

    fn delete_room(&self, id: RoomId) -> Result<()> {
        self.remove_room(id)
    }
}

impl BookingGateway for ApiClient {
    fn query_bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>> {
        match query {
            BookingQuery::All => self.bookings(),
            BookingQuery::ByStatus(status) => self.bookings_by_status(*status),
            BookingQuery::ByRoom(room_id) => self.bookings_by_room(*room_id),
            BookingQuery::ByDate(date) => self.bookings_by_date(*date),
        }
    }

    fn delete_booking(&self, id: BookingId) -> Result<()> {
        self.remove_booking(id)
    }

    fn update_booking_status(&self, id: BookingId, status: BookingStatus) -> Result<Booking> {
        self.set_booking_status(id, status)
    }
}
