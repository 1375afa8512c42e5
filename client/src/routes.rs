//! Route resolution for the todo-list frontend.
//!
//! # Design
//! A static table of four bindings: three literal paths and one
//! parameterized path carrying a list id. Literal matches take priority;
//! the id is an opaque single segment, passed through untouched. There is
//! no catch-all: an unmatched path resolves to `None` and the caller
//! decides what to show.

/// A resolved view binding with its extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Today,
    Upcoming,
    List { id: String },
}

impl Route {
    /// Resolve a navigated path to a view binding.
    ///
    /// Query strings and fragments are ignored; a trailing slash on a
    /// non-root path is tolerated. `/list/{id}` requires a non-empty id
    /// of exactly one segment.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "/" => Some(Route::Home),
            "/today" => Some(Route::Today),
            "/upcoming" => Some(Route::Upcoming),
            _ => path
                .strip_prefix("/list/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::List { id: id.to_string() }),
        }
    }
}
