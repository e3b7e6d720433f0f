use serde::{Deserialize, Serialize};

/// Catalog product kind a booking line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    LabTest,
    LabPackage,
}

impl ItemType {
    pub fn code(&self) -> &'static str {
        match self {
            ItemType::LabTest => "lab_test",
            ItemType::LabPackage => "lab_package",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemType::LabTest => "Lab Test",
            ItemType::LabPackage => "Lab Package",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "lab_test" => Some(ItemType::LabTest),
            "lab_package" => Some(ItemType::LabPackage),
            _ => None,
        }
    }
}
