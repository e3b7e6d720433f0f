pub mod aggregate;

pub use aggregate::{CatalogItem, LabCategory, LabTest, LabTestDto};
