pub mod aggregate;

pub use aggregate::{Patient, PatientDto};
