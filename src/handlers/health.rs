use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::service::CarService;

pub fn router() -> Router<CarService> {
    Router::new().route("/test-conn", get(test_connection))
}

async fn test_connection(State(service): State<CarService>) -> Result<Json<Value>, AppError> {
    let solution = service.test_connection().await?;
    Ok(Json(json!({ "solution": solution })))
}
