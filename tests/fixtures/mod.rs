//! Shared test fixtures: an in-process mock of the food-bank backend.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Json, Path};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::Router;
use serde_json::{json, Value};

/// Handle to a running mock backend.
///
/// The server thread is detached and lives until the test process exits.
pub struct MockBackend {
    /// Base URL to point an `ApiClient` at
    pub base_url: String,
    /// Stored request records, in submission order. Each record is the
    /// submitted payload plus the server-issued fields.
    pub records: Arc<Mutex<Vec<Value>>>,
}

impl MockBackend {
    /// Number of stored requests.
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Clone of the stored record at `index`.
    pub fn record(&self, index: usize) -> Value {
        self.records.lock().unwrap()[index].clone()
    }
}

/// Starts a mock backend serving the given inventory and issuing the given
/// confirmation number for every submission.
pub fn spawn_mock_backend(inventory: Value, confirmation: &str) -> MockBackend {
    let records: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let confirmation = confirmation.to_string();

    let inventory_route = {
        let inventory = inventory.clone();
        move || {
            let inventory = inventory.clone();
            async move { Json(inventory) }
        }
    };

    let create_route = {
        let records = Arc::clone(&records);
        let confirmation = confirmation.clone();
        move |Json(payload): Json<Value>| {
            let records = Arc::clone(&records);
            let confirmation = confirmation.clone();
            async move {
                let mut guard = records.lock().unwrap();
                let mut record = payload;
                record["id"] = json!(format!("req-{}", guard.len() + 1));
                record["confirmation_number"] = json!(confirmation);
                record["status"] = json!("pending");
                record["created_at"] = json!("2024-04-28T12:00:00Z");
                guard.push(record.clone());
                Json(record)
            }
        }
    };

    let list_route = {
        let records = Arc::clone(&records);
        move || {
            let records = Arc::clone(&records);
            async move { Json(Value::Array(records.lock().unwrap().clone())) }
        }
    };

    let update_route = {
        let records = Arc::clone(&records);
        move |Path(id): Path<String>, Json(body): Json<Value>| {
            let records = Arc::clone(&records);
            async move {
                let mut guard = records.lock().unwrap();
                match guard.iter_mut().find(|r| r["id"] == json!(id)) {
                    Some(record) => {
                        record["status"] = body["status"].clone();
                        Ok(Json(record.clone()))
                    }
                    None => Err(StatusCode::NOT_FOUND),
                }
            }
        }
    };

    let app = Router::new()
        .route("/api/inventory", get(inventory_route))
        .route("/api/requests", post(create_route).get(list_route))
        .route("/api/requests/{id}", put(update_route));

    MockBackend {
        base_url: serve(app),
        records,
    }
}

/// Starts a mock backend that answers every route with a 500.
pub fn spawn_error_backend() -> String {
    async fn fail() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    let app = Router::new()
        .route("/api/inventory", get(fail))
        .route("/api/requests", post(fail).get(fail))
        .route("/api/requests/{id}", put(fail));

    serve(app)
}

/// Binds a local port and serves the router on a detached thread.
fn serve(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    listener.set_nonblocking(true).expect("nonblocking listener");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, app).await.expect("serve mock backend");
        });
    });

    format!("http://{addr}")
}

/// A small inventory used across tests.
pub fn sample_inventory() -> Value {
    json!([
        {"id": "batch-1", "item_name": "Apples", "category": "Fresh", "quantity": 10, "unit": "lbs"},
        {"id": "batch-2", "item_name": "Rice", "category": "Dry", "quantity": 30, "unit": "lbs"},
        {"id": "batch-3", "item_name": "Milk", "category": "Dairy", "quantity": 12, "unit": "gal"}
    ])
}
