pub mod cars;
pub mod health;
pub mod stats;
