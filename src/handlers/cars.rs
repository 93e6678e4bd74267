use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarPayload};
use crate::service::CarService;
use crate::validation::validate_car;

pub fn router() -> Router<CarService> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:id", get(get_car).put(update_car).delete(delete_car))
}

fn record_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(format!("Invalid record id: {}", rejection.body_text())))
}

// Only a JSON object is a record; serde would also map an array onto the fields.
fn car_payload(body: Result<Json<Value>, JsonRejection>) -> Result<CarPayload, AppError> {
    let Json(value) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    if !value.is_object() {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn list_cars(State(service): State<CarService>) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(service.list().await?))
}

// Single-record reads answer with a one-element array.
async fn get_car(
    State(service): State<CarService>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Vec<Car>>, AppError> {
    let id = record_id(path)?;
    Ok(Json(vec![service.get(id).await?]))
}

async fn create_car(
    State(service): State<CarService>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let fields = validate_car(&car_payload(body)?)?;
    let car = service.create(fields).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn update_car(
    State(service): State<CarService>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let id = record_id(path)?;
    let fields = validate_car(&car_payload(body)?)?;
    let car = service.update(id, fields).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn delete_car(
    State(service): State<CarService>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = record_id(path)?;
    tracing::debug!("{} Delete requested for id {}", API_NAME, id);
    service.delete(id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        Json(json!({
            "id": id,
            "message": format!("Record with id {} deleted", id)
        })),
    ))
}
