use serde::{Deserialize, Serialize};

/// Single-field update actions available from the booking action drawer.
///
/// These are the `action_type` values the per-booking PATCH accepts. The
/// bulk-update endpoint uses its own action tags (`update_schedule`,
/// `update_items`, `update_discounts`), modeled separately in
/// `domain::a006_booking::diff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    UpdateStatus,
    UpdateAgent,
    UpdatePayment,
    UploadDocument,
    AddRemark,
}

impl ActionType {
    pub fn code(&self) -> &'static str {
        match self {
            ActionType::UpdateStatus => "update_status",
            ActionType::UpdateAgent => "update_agent",
            ActionType::UpdatePayment => "update_payment",
            ActionType::UploadDocument => "upload_document",
            ActionType::AddRemark => "add_remark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActionType::UpdateStatus => "Update Status",
            ActionType::UpdateAgent => "Update Agent",
            ActionType::UpdatePayment => "Update Payment Status",
            ActionType::UploadDocument => "Upload Document",
            ActionType::AddRemark => "Add Remark",
        }
    }

    /// The full drawer action set, in display order.
    pub fn all() -> Vec<ActionType> {
        vec![
            ActionType::UpdateStatus,
            ActionType::UpdateAgent,
            ActionType::UpdatePayment,
            ActionType::UploadDocument,
            ActionType::AddRemark,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "update_status" => Some(ActionType::UpdateStatus),
            "update_agent" => Some(ActionType::UpdateAgent),
            "update_payment" => Some(ActionType::UpdatePayment),
            "upload_document" => Some(ActionType::UploadDocument),
            "add_remark" => Some(ActionType::AddRemark),
            _ => None,
        }
    }
}
