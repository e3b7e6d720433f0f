use serde::{Deserialize, Serialize};

/// Aggregated counters from `/crm/dashboard/`. The backend computes them;
/// the overview page only renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub bookings_today: u64,
    #[serde(default)]
    pub open_bookings: u64,
    #[serde(default)]
    pub pending_verifications: u64,
    #[serde(default)]
    pub samples_pending: u64,
    #[serde(default)]
    pub reports_pending: u64,
    #[serde(default)]
    pub completed_bookings: u64,
    #[serde(default)]
    pub cancelled_bookings: u64,
    #[serde(default)]
    pub total_customers: u64,
    /// Decimal string, same convention as booking money fields.
    #[serde(default)]
    pub revenue_collected: String,
}
