#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_test::TestServer;
use serde_json::json;

use orphanage_directory::{config::Config, handlers::AppState, router, services::OrphanageApi};

/// One part received by the fake API
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl ReceivedPart {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).to_string()
    }
}

#[derive(Default)]
pub struct FakeApiState {
    pub fail_with: Option<StatusCode>,
    // How long `POST orphanages` takes to answer
    pub delay: Option<Duration>,
    pub submissions: Vec<Vec<ReceivedPart>>,
}

pub type SharedFake = Arc<Mutex<FakeApiState>>;

pub fn sample_list() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Casa Lar", "latitude": 42.12, "longitude": -80.08},
        {"id": 2, "name": "Sunrise Home", "latitude": 42.14, "longitude": -80.06}
    ])
}

pub fn sample_record(open_on_weekends: bool) -> serde_json::Value {
    json!({
        "id": 2,
        "name": "Sunrise Home",
        "latitude": 42.14,
        "longitude": -80.06,
        "about": "A home for thirty kids",
        "instructions": "Call before visiting",
        "opening_hours": "8am to 6pm",
        "open_on_weekends": open_on_weekends,
        "images": [
            {"id": 10, "url": "http://img.local/10.jpg"},
            {"id": 11, "url": "http://img.local/11.jpg"},
            {"id": 12, "url": "http://img.local/12.jpg"}
        ]
    })
}

async fn list(State(fake): State<SharedFake>) -> impl IntoResponse {
    if let Some(status) = fake.lock().unwrap().fail_with {
        return status.into_response();
    }
    Json(sample_list()).into_response()
}

async fn show(State(fake): State<SharedFake>, Path(id): Path<u64>) -> impl IntoResponse {
    if let Some(status) = fake.lock().unwrap().fail_with {
        return status.into_response();
    }
    match id {
        2 => Json(sample_record(false)).into_response(),
        3 => Json(sample_record(true)).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create(State(fake): State<SharedFake>, mut multipart: Multipart) -> impl IntoResponse {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();
        parts.push(ReceivedPart { name, file_name, bytes });
    }

    let delay = fake.lock().unwrap().delay;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let mut state = fake.lock().unwrap();
    if let Some(status) = state.fail_with {
        return status.into_response();
    }
    state.submissions.push(parts);
    StatusCode::CREATED.into_response()
}

/// Serve a fake locations API on an ephemeral port, returning its base URL
pub async fn spawn_fake_api() -> (String, SharedFake) {
    let fake = SharedFake::default();
    let app = Router::new()
        .route("/orphanages", get(list).post(create))
        .route("/orphanages/:id", get(show))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/", addr), fake)
}

pub fn api_client(base_url: &str) -> OrphanageApi {
    OrphanageApi::new(base_url, Duration::from_secs(5)).unwrap()
}

/// App router wired to a fresh fake API
pub async fn test_app(config: Config) -> (TestServer, SharedFake) {
    let (base_url, fake) = spawn_fake_api().await;
    let config = Config {
        api_base_url: base_url.clone(),
        ..config
    };
    let state = AppState::new(config, api_client(&base_url)).unwrap();
    let server = TestServer::new(router(state)).unwrap();
    (server, fake)
}

/// Pull the submission token out of a rendered create form
pub fn extract_token(html: &str) -> String {
    let marker = r#"name="submission_token" value=""#;
    let start = html.find(marker).expect("form has a token") + marker.len();
    html[start..start + 36].to_string()
}
