use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::service::CarService;

pub fn router() -> Router<CarService> {
    Router::new()
        .route("/total", get(total_cars))
        .route("/weight", get(total_weight))
}

async fn total_cars(State(service): State<CarService>) -> Result<Json<Value>, AppError> {
    let total = service.total().await?;
    Ok(Json(json!({ "total_cars": total })))
}

// An empty table yields `null`, not zero.
async fn total_weight(State(service): State<CarService>) -> Result<Json<Value>, AppError> {
    let total = service.total_weight().await?;
    Ok(Json(json!({ "total_weight": total })))
}
