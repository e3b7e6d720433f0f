use serde::{Deserialize, Serialize};

/// Kind of file attached to a booking through the document upload action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    CashReceipt,
    LabReport,
    Prescription,
    Other,
}

impl DocumentType {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentType::CashReceipt => "cash_receipt",
            DocumentType::LabReport => "lab_report",
            DocumentType::Prescription => "prescription",
            DocumentType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::CashReceipt => "Cash Receipt",
            DocumentType::LabReport => "Lab Report",
            DocumentType::Prescription => "Prescription",
            DocumentType::Other => "Other",
        }
    }

    pub fn all() -> Vec<DocumentType> {
        vec![
            DocumentType::CashReceipt,
            DocumentType::LabReport,
            DocumentType::Prescription,
            DocumentType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cash_receipt" => Some(DocumentType::CashReceipt),
            "lab_report" => Some(DocumentType::LabReport),
            "prescription" => Some(DocumentType::Prescription),
            "other" => Some(DocumentType::Other),
            _ => None,
        }
    }
}
