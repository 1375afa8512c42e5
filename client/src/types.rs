//! Domain DTOs for the todo-list API.
//!
//! # Design
//! The client itself treats payloads as opaque JSON; these types exist
//! for callers who want typed values on either side of a call. They
//! mirror the backend's schema but are defined independently from the
//! mock-server crate; integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(rename = "listId")]
    pub list_id: u64,
    pub done: bool,
    pub due: String,
}

/// A todo list returned by the API. `todos` is only populated when the
/// server embeds the list's items (single-list fetches).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct List {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub todos: Vec<Todo>,
}

/// Payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(rename = "listId")]
    pub list_id: u64,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub due: String,
}

/// Payload for updating a todo. Omitted fields remain unchanged on the
/// server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "listId", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

/// Payload for creating a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateList {
    pub name: String,
}

/// Payload for updating a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
