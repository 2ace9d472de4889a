//! Service layer: authentication core plus the catalog and booking
//! operations on top of `models`.
//! - `auth` issues and verifies session tokens and enforces ownership.
//! - Storage sits behind repository traits so handlers get it injected.

pub mod errors;
pub mod auth;
pub mod catalog;
pub mod booking;
#[cfg(test)]
pub mod test_support;
