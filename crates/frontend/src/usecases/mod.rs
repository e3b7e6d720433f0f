pub mod u501_booking_wizard;
