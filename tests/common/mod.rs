#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use ferry_cars_api::{
    build_router,
    models::{Car, CarFields},
    repository::{CarStore, StoreError},
    service::CarService,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "http://localhost:4200";

#[derive(Default)]
struct Table {
    next_id: u64,
    rows: BTreeMap<u64, Car>,
}

/// `CarStore` double backed by a map, with a switch to simulate backend failures.
#[derive(Default)]
pub struct InMemoryCarStore {
    table: Mutex<Table>,
    failure: Mutex<Option<StoreError>>,
    writes: AtomicUsize,
}

impl InMemoryCarStore {
    pub fn fail_with(&self, code: &str, message: &str) {
        *self.failure.lock().unwrap() = Some(StoreError::new(code, message));
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    fn check(&self) -> Result<(), StoreError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn ping(&self) -> Result<i64, StoreError> {
        self.check()?;
        Ok(1 + 1)
    }

    async fn list_all(&self) -> Result<Vec<Car>, StoreError> {
        self.check()?;
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Car>, StoreError> {
        self.check()?;
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn create(&self, fields: &CarFields) -> Result<u64, StoreError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(id, fields.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, id: u64, fields: &CarFields) -> Result<u64, StoreError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut table = self.table.lock().unwrap();
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = fields.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: u64) -> Result<u64, StoreError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(self.table.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.check()?;
        Ok(self.table.lock().unwrap().rows.len() as i64)
    }

    async fn sum_weight(&self) -> Result<Option<f64>, StoreError> {
        self.check()?;
        let table = self.table.lock().unwrap();
        if table.rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(table.rows.values().map(|car| car.weight).sum()))
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub struct TestApp {
    pub store: Arc<InMemoryCarStore>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_exposed_errors(false)
    }

    pub fn with_exposed_errors(expose: bool) -> Self {
        let store = Arc::new(InMemoryCarStore::default());
        let service = CarService::new(store.clone(), expose);
        let router = build_router(service, HeaderValue::from_static(ALLOWED_ORIGIN));
        Self { store, router }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(request(Method::GET, path, None)).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(request(Method::DELETE, path, None)).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        self.send(request(Method::POST, path, Some(body))).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        self.send(request(Method::PUT, path, Some(body))).await
    }
}

pub fn request(method: Method, path: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(path);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
