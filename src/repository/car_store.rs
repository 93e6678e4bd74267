use async_trait::async_trait;

use super::StoreError;
use crate::models::{Car, CarFields};

/// Gateway to the `cars` table. Each method issues exactly one query.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Round-trips `SELECT 1 + 1` to prove the connection is alive.
    async fn ping(&self) -> Result<i64, StoreError>;

    /// All rows, in whatever order the backend returns them.
    async fn list_all(&self) -> Result<Vec<Car>, StoreError>;

    async fn get_by_id(&self, id: u64) -> Result<Option<Car>, StoreError>;

    /// Inserts a row and returns the generated id.
    async fn create(&self, fields: &CarFields) -> Result<u64, StoreError>;

    /// Replaces all four fields of a row; returns the number of rows affected.
    async fn update(&self, id: u64, fields: &CarFields) -> Result<u64, StoreError>;

    /// Returns the number of rows removed.
    async fn delete_by_id(&self, id: u64) -> Result<u64, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    /// `None` when the table is empty, since SQL `SUM` over no rows is NULL.
    async fn sum_weight(&self) -> Result<Option<f64>, StoreError>;
}
