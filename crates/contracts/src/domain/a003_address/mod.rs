pub mod aggregate;

pub use aggregate::{Address, AddressDto, Location};
