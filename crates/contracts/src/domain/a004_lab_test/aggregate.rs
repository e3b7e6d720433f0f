use serde::{Deserialize, Serialize};

/// Catalog grouping for tests and packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabCategory {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Single lab test as published in the catalog. Prices arrive as decimal
/// strings ("500.00") and stay strings until the pricing reducer coerces
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
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
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Create/update body for `/crm/lab-tests/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabTestDto {
    pub name: String,
    pub price: String,
    pub offer_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LabTestDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
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

/// Denormalized product snapshot carried inside a booking line. The prices
/// here are the catalog prices at the time the line was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub offer_price: String,
}

impl From<&LabTest> for CatalogItem {
    fn from(test: &LabTest) -> Self {
        Self {
            id: test.id,
            name: test.name.clone(),
            price: test.price.clone(),
            offer_price: test.offer_price.clone(),
        }
    }
}
