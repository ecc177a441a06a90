//! Category DTOs.
//!
//! # Design
//! `Category` is the stored entity and the JSON returned to clients.
//! `CreateCategory` and `UpdateCategory` are the request bodies for the
//! mutating methods. An update only applies the fields present in the JSON.

use serde::{Deserialize, Serialize};

/// A single category held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Body of a `create` request. Without an `id` the store assigns the next
/// free one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCategory {
    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Body of an `update` request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateCategory {
    pub fn rename(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: None,
        }
    }

    /// Apply the present fields to `category`.
    pub fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = Some(description);
        }
    }
}
