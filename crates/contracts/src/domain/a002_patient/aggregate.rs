use serde::{Deserialize, Serialize};

/// Test subject profile under a customer account. Every booking line points
/// at one patient, and that patient must belong to the booking's customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    /// Owning customer id.
    pub user: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Create body for `/crm/patients/`.
#[derive(Debug, Clone, Serialize)]
pub struct PatientDto {
    pub user: i64,
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub age: u32,
}
