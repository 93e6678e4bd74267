//! Field constraints for car create/update payloads.
//!
//! Every check runs on every request; failures are collected in field order
//! so the first entry is the one reported as the primary error.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{CarFields, CarPayload};

pub const PLATE_MESSAGE: &str = "'plate' field must be 2-10 characters long!";
pub const PASSENGERS_MESSAGE: &str = "'passengers' field amount must be from 0 to 99 persons!";
pub const WEIGHT_MESSAGE: &str = "'weight' field amount must be from 0.01 to 99.99 tons!";
pub const PRIORITY_MESSAGE: &str = "when car registration is priority field value = 1, when car registration isn't priority field value = 0!";

const PLATE_LEN: (usize, usize) = (2, 10);
const PASSENGERS_RANGE: (f64, f64) = (0.0, 99.0);
const WEIGHT_RANGE: (f64, f64) = (0.01, 99.99);

const FIELD_ORDER: [&str; 4] = ["plate", "passengers", "weight", "priority"];

/// One failed constraint, as reported to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub value: Value,
    pub msg: String,
    pub location: &'static str,
}

/// All constraint failures of a single payload, in field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violations {
    pub errors: Vec<FieldViolation>,
}

impl Violations {
    pub fn first(&self) -> Option<&FieldViolation> {
        self.errors.first()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(v) => write!(f, "{} ({} invalid field(s))", v.msg, self.errors.len()),
            None => f.write_str("invalid payload"),
        }
    }
}

impl std::error::Error for Violations {}

/// Validates a payload and converts it into typed fields.
pub fn validate_car(payload: &CarPayload) -> Result<CarFields, Violations> {
    let errors = match payload.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_violations(payload, &errors),
    };

    match (
        parse_plate(&payload.plate),
        parse_passengers(&payload.passengers),
        parse_weight(&payload.weight),
        parse_priority(&payload.priority),
    ) {
        (Some(plate), Some(passengers), Some(weight), Some(priority)) if errors.is_empty() => {
            Ok(CarFields {
                plate,
                passengers,
                weight,
                priority,
            })
        }
        _ => {
            debug_assert!(!errors.is_empty(), "unparsable field passed validation");
            Err(Violations { errors })
        }
    }
}

fn collect_violations(payload: &CarPayload, errors: &ValidationErrors) -> Vec<FieldViolation> {
    let field_errors = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|&field| {
            let first = field_errors.get(field)?.first()?;
            let value = match field {
                "plate" => &payload.plate,
                "passengers" => &payload.passengers,
                "weight" => &payload.weight,
                _ => &payload.priority,
            };
            Some(FieldViolation {
                field,
                value: value.clone(),
                msg: first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string()),
                location: "body",
            })
        })
        .collect()
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn validate_plate(value: &Value) -> Result<(), ValidationError> {
    parse_plate(value)
        .map(|_| ())
        .ok_or_else(|| violation("length", PLATE_MESSAGE))
}

pub fn validate_passengers(value: &Value) -> Result<(), ValidationError> {
    parse_passengers(value)
        .map(|_| ())
        .ok_or_else(|| violation("range", PASSENGERS_MESSAGE))
}

pub fn validate_weight(value: &Value) -> Result<(), ValidationError> {
    parse_weight(value)
        .map(|_| ())
        .ok_or_else(|| violation("range", WEIGHT_MESSAGE))
}

pub fn validate_priority(value: &Value) -> Result<(), ValidationError> {
    parse_priority(value)
        .map(|_| ())
        .ok_or_else(|| violation("priority", PRIORITY_MESSAGE))
}

fn parse_plate(value: &Value) -> Option<String> {
    let plate = value.as_str()?;
    let len = plate.chars().count();
    (PLATE_LEN.0..=PLATE_LEN.1)
        .contains(&len)
        .then(|| plate.to_string())
}

// Numbers may arrive as JSON numbers or numeric strings.
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn parse_passengers(value: &Value) -> Option<f64> {
    let n = as_number(value)?;
    (n >= PASSENGERS_RANGE.0 && n <= PASSENGERS_RANGE.1).then_some(n)
}

fn parse_weight(value: &Value) -> Option<f64> {
    let n = as_number(value)?;
    (n >= WEIGHT_RANGE.0 && n <= WEIGHT_RANGE.1).then_some(n)
}

fn parse_priority(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => match n.as_u64()? {
            0 => Some(0),
            1 => Some(1),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "0" => Some(0),
            "1" => Some(1),
            _ => None,
        },
        _ => None,
    }
}
