pub mod car_store;
pub mod errors;
pub mod mysql_car_store;

pub use car_store::CarStore;
pub use errors::StoreError;
pub use mysql_car_store::MySqlCarStore;
