use serde::{Deserialize, Serialize};

use crate::domain::a004_lab_test::CatalogItem;

/// Bundle of lab tests sold as one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabPackage {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub offer_price: String,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Ids of the member lab tests.
    #[serde(default)]
    pub test_ids: Vec<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Create/update body for `/crm/lab-packages/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabPackageDto {
    pub name: String,
    pub price: String,
    pub offer_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    pub test_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LabPackageDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.test_ids.is_empty() {
            return Err("Select at least one test".into());
        }
        if self.price.trim().parse::<f64>().is_err() {
            return Err("Price must be a number".into());
        }
        if self.offer_price.trim().parse::<f64>().is_err() {
            return Err("Offer price must be a number".into());
        }
        Ok(())
    }
}

impl From<&LabPackage> for CatalogItem {
    fn from(package: &LabPackage) -> Self {
        Self {
            id: package.id,
            name: package.name.clone(),
            price: package.price.clone(),
            offer_price: package.offer_price.clone(),
        }
    }
}
