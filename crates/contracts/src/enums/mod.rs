pub mod action_type;
pub mod booking_status;
pub mod document_type;
pub mod item_type;
pub mod payment_method;
pub mod payment_status;
pub mod time_slot;

pub use action_type::ActionType;
pub use booking_status::BookingStatus;
pub use document_type::DocumentType;
pub use item_type::ItemType;
pub use payment_method::PaymentMethod;
pub use payment_status::PaymentStatus;
pub use time_slot::TIME_SLOTS;
