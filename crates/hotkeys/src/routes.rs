//! Chord route table: second key of a "g" chord -> destination path

use serde::{Deserialize, Serialize};

use crate::models::Key;

/// A single "g <key>" navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Second key of the chord
    pub key: Key,
    /// Absolute path to redirect to
    pub path: String,
    /// Description shown in the help dialog
    #[serde(default)]
    pub label: String,
}

impl Route {
    pub fn new(key: impl Into<Key>, path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Ordered set of chord routes
///
/// Order matters only for the help dialog; lookups are by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Find the route bound to `key`
    pub fn lookup(&self, key: &Key) -> Option<&Route> {
        self.routes.iter().find(|route| route.key == *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            Route::new("h", "/", "Главная"),
            Route::new("p", "/properties", "Каталог «Недвижимость»"),
            Route::new("m", "/user/properties", "Мои объявления"),
            Route::new("r", "/reports", "Отчеты"),
        ])
    }
}
