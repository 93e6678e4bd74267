use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use validator::Validate;

use crate::validation::{validate_passengers, validate_plate, validate_priority, validate_weight};

/// A stored row of the `cars` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Car {
    pub id: u64,
    pub plate: String,
    pub passengers: f64,
    pub weight: f64,
    pub priority: u8,
}

/// The four business fields written on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct CarFields {
    pub plate: String,
    pub passengers: f64,
    pub weight: f64,
    pub priority: u8,
}

impl CarFields {
    pub fn with_id(self, id: u64) -> Car {
        Car {
            id,
            plate: self.plate,
            passengers: self.passengers,
            weight: self.weight,
            priority: self.priority,
        }
    }
}

// Fields stay untyped so a wrong type is reported as a validation
// failure alongside the others instead of failing deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct CarPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_plate"))]
    pub plate: Value,
    #[serde(default)]
    #[validate(custom(function = "validate_passengers"))]
    pub passengers: Value,
    #[serde(default)]
    #[validate(custom(function = "validate_weight"))]
    pub weight: Value,
    #[serde(default)]
    #[validate(custom(function = "validate_priority"))]
    pub priority: Value,
}
