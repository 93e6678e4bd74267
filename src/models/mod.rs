pub mod car;

pub use car::{Car, CarFields, CarPayload};
