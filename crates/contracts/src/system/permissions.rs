//! Permission keys understood by the backend's role model.
//!
//! The sidebar and page-level actions gate on these; the server enforces the
//! same keys on its side.

pub const DASHBOARD: &str = "dashboard";

pub const BOOKINGS_VIEW: &str = "bookings";
pub const BOOKINGS_CREATE: &str = "bookings.create";
pub const BOOKINGS_EDIT: &str = "bookings.edit";

pub const CUSTOMERS_VIEW: &str = "customers";
pub const CUSTOMERS_EDIT: &str = "customers.edit";

pub const LAB_PRODUCTS: &str = "lab_products";

pub const SETTINGS: &str = "settings";
