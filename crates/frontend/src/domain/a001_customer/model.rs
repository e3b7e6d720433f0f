//! Backend calls for customers and their dependents (patients, addresses).

use contracts::domain::a001_customer::{Customer, CustomerDto};
use contracts::domain::a002_patient::{Patient, PatientDto};
use contracts::domain::a003_address::{Address, AddressDto, Location};
use contracts::shared::error::ApiError;

use crate::shared::http;

pub const PAGE_SIZE: u32 = 20;

pub async fn fetch_customers(
    page: u32,
    search: &str,
) -> Result<(Vec<Customer>, Option<u64>), ApiError> {
    let mut path = format!("/crm/users/?page={page}&page_size={PAGE_SIZE}");
    if !search.trim().is_empty() {
        path.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }
    http::get_list(&path).await
}

pub async fn search_customers(query: &str) -> Result<Vec<Customer>, ApiError> {
    let path = format!(
        "/crm/users/?page_size=10&search={}",
        urlencoding::encode(query.trim())
    );
    http::get_list(&path).await.map(|(rows, _)| rows)
}

pub async fn fetch_customer(id: i64) -> Result<Customer, ApiError> {
    http::get_json(&format!("/crm/users/{id}/")).await
}

pub async fn create_customer(dto: &CustomerDto) -> Result<Customer, ApiError> {
    http::post_json("/crm/users/", dto).await
}

pub async fn update_customer(id: i64, dto: &CustomerDto) -> Result<Customer, ApiError> {
    http::put_json(&format!("/crm/users/{id}/"), dto).await
}

pub async fn fetch_addresses(customer_id: i64) -> Result<Vec<Address>, ApiError> {
    http::get_list(&format!("/crm/addresses/?customer={customer_id}"))
        .await
        .map(|(rows, _)| rows)
}

pub async fn create_address(dto: &AddressDto) -> Result<Address, ApiError> {
    http::post_json("/crm/addresses/", dto).await
}

/// Serviceable locality search for the address form.
pub async fn search_locations(query: &str) -> Result<Vec<Location>, ApiError> {
    let path = format!(
        "/crm/locations/?page_size=10&search={}",
        urlencoding::encode(query.trim())
    );
    http::get_list(&path).await.map(|(rows, _)| rows)
}

pub async fn fetch_patients(customer_id: i64) -> Result<Vec<Patient>, ApiError> {
    http::get_list(&format!("/crm/patients/?page_size=50&customer={customer_id}"))
        .await
        .map(|(rows, _)| rows)
}

pub async fn create_patient(dto: &PatientDto) -> Result<Patient, ApiError> {
    http::post_json("/crm/patients/", dto).await
}
