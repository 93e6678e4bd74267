use std::sync::Arc;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarFields};
use crate::repository::{CarStore, StoreError};

/// Runs car operations against the injected store and turns their outcomes
/// into `AppError`s where the request cannot succeed.
#[derive(Clone)]
pub struct CarService {
    store: Arc<dyn CarStore>,
    expose_store_errors: bool,
}

impl CarService {
    pub fn new(store: Arc<dyn CarStore>, expose_store_errors: bool) -> Self {
        Self {
            store,
            expose_store_errors,
        }
    }

    fn store_failure(&self, source: StoreError) -> AppError {
        AppError::Store {
            source,
            expose: self.expose_store_errors,
        }
    }

    pub async fn test_connection(&self) -> Result<i64, AppError> {
        let solution = self
            .store
            .ping()
            .await
            .map_err(|e| self.store_failure(e))?;
        tracing::info!("{} The solution is: {}", API_NAME, solution);
        Ok(solution)
    }

    pub async fn list(&self) -> Result<Vec<Car>, AppError> {
        let cars = self
            .store
            .list_all()
            .await
            .map_err(|e| self.store_failure(e))?;
        tracing::info!("{} You got all {} records!", API_NAME, cars.len());
        Ok(cars)
    }

    pub async fn get(&self, id: u64) -> Result<Car, AppError> {
        let car = self
            .store
            .get_by_id(id)
            .await
            .map_err(|e| self.store_failure(e))?
            .ok_or(AppError::NotFound { id })?;
        tracing::info!("{} You got record with id: {}", API_NAME, car.id);
        Ok(car)
    }

    pub async fn create(&self, fields: CarFields) -> Result<Car, AppError> {
        let id = self
            .store
            .create(&fields)
            .await
            .map_err(|e| self.store_failure(e))?;
        let car = fields.with_id(id);
        tracing::info!("{} Created: {:?}", API_NAME, car);
        Ok(car)
    }

    pub async fn update(&self, id: u64, fields: CarFields) -> Result<Car, AppError> {
        let affected = self
            .store
            .update(id, &fields)
            .await
            .map_err(|e| self.store_failure(e))?;
        tracing::info!("{} Updated rows: {}", API_NAME, affected);
        if affected == 0 {
            return Err(AppError::NotFound { id });
        }
        Ok(fields.with_id(id))
    }

    pub async fn delete(&self, id: u64) -> Result<(), AppError> {
        let affected = self
            .store
            .delete_by_id(id)
            .await
            .map_err(|e| self.store_failure(e))?;
        tracing::info!("{} Deleted rows: {}", API_NAME, affected);
        if affected == 0 {
            return Err(AppError::NotFound { id });
        }
        Ok(())
    }

    pub async fn total(&self) -> Result<i64, AppError> {
        let total = self
            .store
            .count()
            .await
            .map_err(|e| self.store_failure(e))?;
        tracing::info!("{} Total cars: {}", API_NAME, total);
        Ok(total)
    }

    pub async fn total_weight(&self) -> Result<Option<f64>, AppError> {
        let total = self
            .store
            .sum_weight()
            .await
            .map_err(|e| self.store_failure(e))?;
        tracing::info!("{} Total weight: {:?}", API_NAME, total);
        Ok(total)
    }
}
