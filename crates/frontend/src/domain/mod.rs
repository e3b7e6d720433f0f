pub mod a001_customer;
pub mod a004_lab_test;
pub mod a005_lab_package;
pub mod a006_booking;
