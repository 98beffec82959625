pub mod config;
pub mod error;
pub mod generator;
pub mod result;
pub mod rng;

mod tests_rng;
