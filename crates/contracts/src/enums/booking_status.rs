use serde::{Deserialize, Serialize};

/// Booking workflow stage.
///
/// The server is the authority on transitions; the client reads the current
/// value and proposes the next one through the action drawer. Stages named
/// after roles (`root_manager`, `phlebo`, ...) mean "waiting on that role".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Open,
    Verified,
    RootManager,
    Phlebo,
    SampleCollected,
    PaymentCollected,
    ReportUploaded,
    HealthManager,
    Dietitian,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Open => "open",
            BookingStatus::Verified => "verified",
            BookingStatus::RootManager => "root_manager",
            BookingStatus::Phlebo => "phlebo",
            BookingStatus::SampleCollected => "sample_collected",
            BookingStatus::PaymentCollected => "payment_collected",
            BookingStatus::ReportUploaded => "report_uploaded",
            BookingStatus::HealthManager => "health_manager",
            BookingStatus::Dietitian => "dietitian",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Open => "Open",
            BookingStatus::Verified => "Verified",
            BookingStatus::RootManager => "Root Manager",
            BookingStatus::Phlebo => "Phlebo",
            BookingStatus::SampleCollected => "Sample Collected",
            BookingStatus::PaymentCollected => "Payment Collected",
            BookingStatus::ReportUploaded => "Report Uploaded",
            BookingStatus::HealthManager => "Health Manager",
            BookingStatus::Dietitian => "Dietitian",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// All workflow stages, in pipeline order.
    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Open,
            BookingStatus::Verified,
            BookingStatus::RootManager,
            BookingStatus::Phlebo,
            BookingStatus::SampleCollected,
            BookingStatus::PaymentCollected,
            BookingStatus::ReportUploaded,
            BookingStatus::HealthManager,
            BookingStatus::Dietitian,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(BookingStatus::Open),
            "verified" => Some(BookingStatus::Verified),
            "root_manager" => Some(BookingStatus::RootManager),
            "phlebo" => Some(BookingStatus::Phlebo),
            "sample_collected" => Some(BookingStatus::SampleCollected),
            "payment_collected" => Some(BookingStatus::PaymentCollected),
            "report_uploaded" => Some(BookingStatus::ReportUploaded),
            "health_manager" => Some(BookingStatus::HealthManager),
            "dietitian" => Some(BookingStatus::Dietitian),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
