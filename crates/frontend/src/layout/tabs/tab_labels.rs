//! Single source of truth for tab titles.

/// Human-readable tab title for a tab key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Dashboard",

        "a001_customer" => "Customers",
        "a004_lab_test" => "Lab Tests",
        "a005_lab_package" => "Lab Packages",
        "a006_booking" => "Bookings",

        "u501_booking_wizard_new" => "New Booking",
        k if k.starts_with("u501_booking_wizard_new_for_") => "New Booking",
        k if k.starts_with("u501_booking_wizard_edit_") => "Edit Booking",

        "sys_users" => "Users & Roles",

        _ => "Unknown",
    }
}
