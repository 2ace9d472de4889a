//! Booking orders: storage abstraction and the owner-aware service.

pub mod repository;
pub mod service;

pub use repository::{BookingRepository, SeaOrmBookingRepository};
pub use service::BookingService;
