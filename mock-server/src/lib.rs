//! In-memory implementation of the todo-list backend's REST surface.
//!
//! Mirrors the real server's routes under `/api`: CRUD for todos and
//! lists, a health probe, sequential numeric ids, and `{"error": ...}`
//! bodies on failure. State lives in a `RwLock`-guarded store, so a fresh
//! `app()` starts empty and each test gets its own.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(rename = "listId")]
    pub list_id: u64,
    pub done: bool,
    pub due: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct List {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub todos: Vec<Todo>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default, rename = "listId")]
    pub list_id: u64,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub due: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    #[serde(rename = "listId")]
    pub list_id: Option<u64>,
    pub done: Option<bool>,
    pub due: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateList {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdateList {
    pub name: Option<String>,
}

#[derive(Default)]
pub struct Store {
    todos: HashMap<u64, Todo>,
    lists: HashMap<u64, List>,
    next_todo_id: u64,
    next_list_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let api = Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/lists", get(list_lists).post(create_list))
        .route(
            "/lists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_json(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Ids arrive as path strings; the real server rejects non-numeric ones
/// with a 400 before touching storage.
fn parse_id(raw: &str, resource: &str) -> Result<u64, Response> {
    raw.parse().map_err(|_| {
        error_json(
            StatusCode::BAD_REQUEST,
            &format!("Invalid {resource} ID"),
        )
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "message": "Server is running" }))
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<CreateTodo>) -> Response {
    let mut store = db.write().await;
    store.next_todo_id += 1;
    let todo = Todo {
        id: store.next_todo_id,
        title: input.title,
        list_id: input.list_id,
        done: input.done,
        due: input.due,
    };
    store.todos.insert(todo.id, todo.clone());
    (StatusCode::CREATED, Json(todo)).into_response()
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "todo") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let store = db.read().await;
    match store.todos.get(&id) {
        Some(todo) => Json(todo.clone()).into_response(),
        None => error_json(StatusCode::NOT_FOUND, "Todo not found"),
    }
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Response {
    let id = match parse_id(&id, "todo") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut store = db.write().await;
    let Some(todo) = store.todos.get_mut(&id) else {
        return error_json(StatusCode::NOT_FOUND, "Todo not found");
    };
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(list_id) = input.list_id {
        todo.list_id = list_id;
    }
    if let Some(done) = input.done {
        todo.done = done;
    }
    if let Some(due) = input.due {
        todo.due = due;
    }
    Json(todo.clone()).into_response()
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "todo") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut store = db.write().await;
    match store.todos.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error_json(StatusCode::NOT_FOUND, "Todo not found"),
    }
}

async fn list_lists(State(db): State<Db>) -> Json<Vec<List>> {
    let store = db.read().await;
    Json(store.lists.values().cloned().collect())
}

async fn create_list(State(db): State<Db>, Json(input): Json<CreateList>) -> Response {
    let mut store = db.write().await;
    store.next_list_id += 1;
    let list = List {
        id: store.next_list_id,
        name: input.name,
        todos: Vec::new(),
    };
    store.lists.insert(list.id, list.clone());
    (StatusCode::CREATED, Json(list)).into_response()
}

/// Single-list fetches embed the list's todos, as the real server does.
async fn get_list(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "list") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let store = db.read().await;
    match store.lists.get(&id) {
        Some(list) => {
            let mut list = list.clone();
            list.todos = store
                .todos
                .values()
                .filter(|todo| todo.list_id == id)
                .cloned()
                .collect();
            Json(list).into_response()
        }
        None => error_json(StatusCode::NOT_FOUND, "List not found"),
    }
}

async fn update_list(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateList>,
) -> Response {
    let id = match parse_id(&id, "list") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut store = db.write().await;
    let Some(list) = store.lists.get_mut(&id) else {
        return error_json(StatusCode::NOT_FOUND, "List not found");
    };
    if let Some(name) = input.name {
        list.name = name;
    }
    Json(list.clone()).into_response()
}

async fn delete_list(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "list") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut store = db.write().await;
    match store.lists.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error_json(StatusCode::NOT_FOUND, "List not found"),
    }
}
