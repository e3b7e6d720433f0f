//! Staff role names as the backend spells them.
//!
//! The authorization table keys off these exact strings; a rename on the
//! server must be mirrored here.

pub const ADMIN: &str = "Admin";
pub const VERIFIER: &str = "Verifier";
pub const ROOT_MANAGER: &str = "Root Manager";
pub const PHLEBO: &str = "Phlebo";
pub const REPORT_UPLOADER: &str = "Report Uploader";
pub const HEALTH_MANAGER: &str = "Health Manager";
pub const DIETITIAN: &str = "Dietitian";
