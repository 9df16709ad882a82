//! In-process stand-in for the REST store, modelled on json-server.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// What a successful `DELETE /users/{id}` answers with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DeleteReply {
    /// `200` with `{}`, as json-server does
    #[default]
    EmptyObject,
    /// `204` with no body
    NoContent,
    /// `200` with a JSON `null`
    Null,
    /// `200` with the removed record
    Echo,
}

#[derive(Default)]
pub struct StoreState {
    pub users: Vec<Value>,
    pub companies: Vec<Value>,
    pub requests: Vec<RecordedRequest>,
    pub delete_reply: DeleteReply,
    next_id: u32,
}

impl StoreState {
    fn seeded() -> Self {
        Self {
            users: vec![
                json!({ "id": "23", "firstName": "Bill", "age": 20, "companyId": "1" }),
                json!({ "id": "40", "firstName": "Alex", "age": 40, "companyId": "2" }),
                json!({ "id": "41", "firstName": "Nick", "age": 40, "companyId": "2" }),
                json!({ "id": "50", "firstName": "Sam", "age": 31 }),
            ],
            companies: vec![
                json!({ "id": "1", "name": "Apple", "description": "iphone" }),
                json!({ "id": "2", "name": "Google", "description": "search" }),
            ],
            requests: Vec::new(),
            delete_reply: DeleteReply::default(),
            next_id: 100,
        }
    }

    fn record(&mut self, method: Method, path: String, body: Option<Value>) {
        self.requests.push(RecordedRequest { method, path, body });
    }
}

type Shared = Arc<Mutex<StoreState>>;
type Reply = (StatusCode, Json<Value>);

fn find(records: &[Value], id: &str) -> Option<usize> {
    records.iter().position(|r| r["id"] == id)
}

fn not_found() -> Reply {
    (StatusCode::NOT_FOUND, Json(json!({})))
}

async fn get_user(State(state): State<Shared>, Path(id): Path<String>) -> Reply {
    let mut state = state.lock().unwrap();
    state.record(Method::GET, format!("/users/{id}"), None);
    match find(&state.users, &id) {
        Some(i) => (StatusCode::OK, Json(state.users[i].clone())),
        None => not_found(),
    }
}

async fn get_company(State(state): State<Shared>, Path(id): Path<String>) -> Reply {
    let mut state = state.lock().unwrap();
    state.record(Method::GET, format!("/companies/{id}"), None);
    if id == "broken" {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})));
    }
    match find(&state.companies, &id) {
        Some(i) => (StatusCode::OK, Json(state.companies[i].clone())),
        None => not_found(),
    }
}

async fn company_users(State(state): State<Shared>, Path(id): Path<String>) -> Reply {
    let mut state = state.lock().unwrap();
    state.record(Method::GET, format!("/companies/{id}/users"), None);
    let users: Vec<Value> = state
        .users
        .iter()
        .filter(|u| u["companyId"] == id.as_str())
        .cloned()
        .collect();
    (StatusCode::OK, Json(Value::Array(users)))
}

async fn create_user(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut state = state.lock().unwrap();
    state.record(Method::POST, "/users".to_string(), Some(body.clone()));
    state.next_id += 1;
    let mut user = body;
    user["id"] = json!(state.next_id.to_string());
    state.users.push(user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn update_user(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut state = state.lock().unwrap();
    state.record(Method::PATCH, format!("/users/{id}"), Some(body.clone()));
    let Some(i) = find(&state.users, &id) else {
        return not_found();
    };
    if let (Some(user), Some(changes)) = (state.users[i].as_object_mut(), body.as_object()) {
        for (key, value) in changes {
            user.insert(key.clone(), value.clone());
        }
    }
    (StatusCode::OK, Json(state.users[i].clone()))
}

async fn delete_user(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    state.record(Method::DELETE, format!("/users/{id}"), None);
    let Some(i) = find(&state.users, &id) else {
        return not_found().into_response();
    };
    let removed = state.users.remove(i);
    match state.delete_reply {
        DeleteReply::EmptyObject => (StatusCode::OK, Json(json!({}))).into_response(),
        DeleteReply::NoContent => StatusCode::NO_CONTENT.into_response(),
        DeleteReply::Null => (StatusCode::OK, Json(Value::Null)).into_response(),
        DeleteReply::Echo => (StatusCode::OK, Json(removed)).into_response(),
    }
}

pub struct FakeStore {
    pub url: String,
    pub state: Shared,
}

impl FakeStore {
    pub fn reply_to_delete_with(&self, reply: DeleteReply) {
        self.state.lock().unwrap().delete_reply = reply;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .filter_map(|u| u["id"].as_str().map(str::to_string))
            .collect()
    }
}

/// Start a seeded store on an ephemeral port of the current runtime.
pub async fn spawn_store() -> FakeStore {
    let state: Shared = Arc::new(Mutex::new(StoreState::seeded()));
    let app = Router::new()
        .route("/users", axum::routing::post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/companies/{id}", get(get_company))
        .route("/companies/{id}/users", get(company_users))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeStore {
        url: format!("http://{addr}"),
        state,
    }
}

/// An address nothing listens on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn http_client() -> reqwest::Client {
    let _ = rustls::crypto::ring::default_provider().install_default();
    reqwest::Client::new()
}
