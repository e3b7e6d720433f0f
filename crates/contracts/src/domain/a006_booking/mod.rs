pub mod aggregate;
pub mod diff;
pub mod pricing;
pub mod roles;
pub mod wizard;
pub mod workflow;

pub use aggregate::{
    ActionRequest, Booking, BookingActionRow, BookingDocument, BookingPayment,
    CreateBookingPayload, Coupon, ItemRow, ServerItem,
};
pub use diff::{
    build_bulk_update_payload, diff_booking, BookingChanges, BulkAction, DiffItem, EditSnapshot,
};
pub use pricing::{
    admin_discount_within_bounds, format_amount, max_admin_discount, parse_money, price_booking,
    PricingMode, PricingSummary,
};
pub use wizard::{
    can_continue, can_open_step, initial_step, is_locked_for_full_edit, WizardMode, WizardStep,
};
pub use workflow::{action_options, status_options};
