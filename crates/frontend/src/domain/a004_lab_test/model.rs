//! Backend calls for the lab test catalog.

use contracts::domain::a004_lab_test::{LabCategory, LabTest, LabTestDto};
use contracts::shared::error::ApiError;

use crate::shared::http;

pub const PAGE_SIZE: u32 = 20;

pub async fn fetch_lab_tests(
    page: u32,
    search: &str,
) -> Result<(Vec<LabTest>, Option<u64>), ApiError> {
    let mut path = format!("/crm/lab-tests/?page={page}&page_size={PAGE_SIZE}");
    if !search.trim().is_empty() {
        path.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }
    http::get_list(&path).await
}

pub async fn search_lab_tests(query: &str) -> Result<Vec<LabTest>, ApiError> {
    let path = format!(
        "/crm/lab-tests/?page_size=10&search={}",
        urlencoding::encode(query.trim())
    );
    http::get_list(&path).await.map(|(rows, _)| rows)
}

pub async fn create_lab_test(dto: &LabTestDto) -> Result<LabTest, ApiError> {
    http::post_json("/crm/lab-tests/", dto).await
}

pub async fn update_lab_test(id: i64, dto: &LabTestDto) -> Result<LabTest, ApiError> {
    http::put_json(&format!("/crm/lab-tests/{id}/"), dto).await
}

pub async fn fetch_categories() -> Result<Vec<LabCategory>, ApiError> {
    http::get_list("/crm/lab-category/?page_size=100")
        .await
        .map(|(rows, _)| rows)
}

pub async fn create_category(name: &str) -> Result<LabCategory, ApiError> {
    http::post_json("/crm/lab-category/", &serde_json::json!({ "name": name })).await
}
