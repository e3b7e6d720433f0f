//! Backend calls for the lab package catalog.

use contracts::domain::a005_lab_package::{LabPackage, LabPackageDto};
use contracts::shared::error::ApiError;

use crate::shared::http;

pub const PAGE_SIZE: u32 = 20;

pub async fn fetch_lab_packages(
    page: u32,
    search: &str,
) -> Result<(Vec<LabPackage>, Option<u64>), ApiError> {
    let mut path = format!("/crm/lab-packages/?page={page}&page_size={PAGE_SIZE}");
    if !search.trim().is_empty() {
        path.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }
    http::get_list(&path).await
}

pub async fn search_lab_packages(query: &str) -> Result<Vec<LabPackage>, ApiError> {
    let path = format!(
        "/crm/lab-packages/?page_size=10&search={}",
        urlencoding::encode(query.trim())
    );
    http::get_list(&path).await.map(|(rows, _)| rows)
}

pub async fn create_lab_package(dto: &LabPackageDto) -> Result<LabPackage, ApiError> {
    http::post_json("/crm/lab-packages/", dto).await
}

pub async fn update_lab_package(id: i64, dto: &LabPackageDto) -> Result<LabPackage, ApiError> {
    http::put_json(&format!("/crm/lab-packages/{id}/"), dto).await
}
