pub mod cookies;
pub mod errors;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use startup::run;
