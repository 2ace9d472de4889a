//! Shared building blocks for the Car Doctors crates: wire types and
//! logging setup.

pub mod types;
pub mod utils;
