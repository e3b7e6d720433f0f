use serde::{Deserialize, Serialize};

/// Serviceable locality (searchable on its own endpoint); an address points
/// at exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
}

/// Collection address of a customer. At most one default per customer;
/// the server enforces the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    /// Owning customer id.
    pub user: i64,
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub location: Option<i64>,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    /// "line1, line2, City, State – 600001" single-line rendering.
    pub fn summary(&self) -> String {
        let mut out = self.line1.clone();
        if let Some(line2) = self.line2.as_deref().filter(|l| !l.trim().is_empty()) {
            out.push_str(", ");
            out.push_str(line2);
        }
        if !self.city.is_empty() {
            out.push_str(", ");
            out.push_str(&self.city);
        }
        if !self.state.is_empty() {
            out.push_str(", ");
            out.push_str(&self.state);
        }
        if !self.pincode.is_empty() {
            out.push_str(" – ");
            out.push_str(&self.pincode);
        }
        out
    }
}

/// Create body for `/crm/addresses/`.
#[derive(Debug, Clone, Serialize)]
pub struct AddressDto {
    pub user: i64,
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub location: i64,
    pub is_default: bool,
}
