pub mod errors;
pub mod db;
pub mod car_service;
pub mod booking;

#[cfg(test)]
mod tests;
