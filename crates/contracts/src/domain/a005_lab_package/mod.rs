pub mod aggregate;

pub use aggregate::{LabPackage, LabPackageDto};
