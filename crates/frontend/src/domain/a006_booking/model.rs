//! Backend calls for the bookings module.

use contracts::domain::a006_booking::{
    Booking, BookingActionRow, BookingDocument, BookingPayment,
};
use contracts::shared::error::ApiError;
use contracts::system::auth::UserInfo;
use serde_json::Value;

use crate::shared::http;

pub const PAGE_SIZE: u32 = 20;

/// Paged booking list with optional text search and status filter.
pub async fn fetch_bookings(
    page: u32,
    search: &str,
    status: &str,
) -> Result<(Vec<Booking>, Option<u64>), ApiError> {
    let mut path = format!("/bookings/?page={page}&page_size={PAGE_SIZE}");
    if !search.trim().is_empty() {
        path.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }
    if !status.is_empty() {
        path.push_str(&format!("&status={}", urlencoding::encode(status)));
    }
    http::get_list(&path).await
}

pub async fn fetch_booking(id: i64) -> Result<Booking, ApiError> {
    http::get_json(&format!("/bookings/{id}/")).await
}

/// Single-action PATCH from the action drawer (JSON flavor).
pub async fn patch_booking_action(id: i64, payload: &Value) -> Result<Booking, ApiError> {
    http::patch_json(&format!("/bookings/{id}/"), payload).await
}

/// Cash payment capture goes multipart so the proof image can ride along.
pub async fn patch_booking_form(id: i64, form: &web_sys::FormData) -> Result<Booking, ApiError> {
    http::patch_form(&format!("/bookings/{id}/"), form).await
}

/// Attach a document to a booking (multipart).
pub async fn upload_document(form: &web_sys::FormData) -> Result<BookingDocument, ApiError> {
    http::post_form("/booking-documents/", form).await
}

/// Bulk update from the edit wizard: one PATCH carrying every detected
/// change. All-or-nothing on the server.
pub async fn bulk_update_booking(id: i64, payload: &Value) -> Result<Value, ApiError> {
    http::patch_json(&format!("/bookings-bulk-update/{id}/"), payload).await
}

pub async fn fetch_payments(booking_id: i64) -> Result<Vec<BookingPayment>, ApiError> {
    http::get_list(&format!("/booking-payments/?booking={booking_id}"))
        .await
        .map(|(rows, _)| rows)
}

pub async fn fetch_documents(booking_id: i64) -> Result<Vec<BookingDocument>, ApiError> {
    http::get_list(&format!("/booking-documents/?booking={booking_id}"))
        .await
        .map(|(rows, _)| rows)
}

pub async fn fetch_history(booking_id: i64) -> Result<Vec<BookingActionRow>, ApiError> {
    http::get_list(&format!("/booking-actions/?booking={booking_id}"))
        .await
        .map(|(rows, _)| rows)
}

/// Staff/agent search for the assignment dropdowns.
pub async fn search_agents(query: &str) -> Result<Vec<UserInfo>, ApiError> {
    let path = format!(
        "/crm/users/?staff=true&search={}",
        urlencoding::encode(query.trim())
    );
    http::get_list(&path).await.map(|(rows, _)| rows)
}
