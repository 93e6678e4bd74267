use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{CarStore, StoreError};
use crate::models::{Car, CarFields};

#[derive(Clone)]
pub struct MySqlCarStore {
    pool: MySqlPool,
}

impl MySqlCarStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for MySqlCarStore {
    async fn ping(&self) -> Result<i64, StoreError> {
        let solution = sqlx::query_scalar::<_, i64>("SELECT 1 + 1 AS solution")
            .fetch_one(&self.pool)
            .await?;
        Ok(solution)
    }

    async fn list_all(&self) -> Result<Vec<Car>, StoreError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT id, plate, passengers, weight, priority FROM cars",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cars)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Car>, StoreError> {
        let car = sqlx::query_as::<_, Car>(
            "SELECT id, plate, passengers, weight, priority FROM cars WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(car)
    }

    async fn create(&self, fields: &CarFields) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO cars (plate, passengers, weight, priority) VALUES (?, ?, ?, ?)",
        )
        .bind(&fields.plate)
        .bind(fields.passengers)
        .bind(fields.weight)
        .bind(fields.priority)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id())
    }

    async fn update(&self, id: u64, fields: &CarFields) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE cars SET plate = ?, passengers = ?, weight = ?, priority = ? WHERE id = ?",
        )
        .bind(&fields.plate)
        .bind(fields.passengers)
        .bind(fields.weight)
        .bind(fields.priority)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: u64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) AS total_cars FROM cars")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn sum_weight(&self) -> Result<Option<f64>, StoreError> {
        let total = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT SUM(weight) AS total_weight FROM cars",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }
}
