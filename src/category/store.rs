//! Defines the category store trait.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRef;

use crate::{
    AppState, Error,
    category::{Category, CategoryId, CategoryName},
};

/// Creates, retrieves, renames and deletes categories.
///
/// A missing category is reported as `Ok(None)`. An `Err` always means the
/// store itself failed and must be passed on to the caller.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Get all categories.
    async fn list(&self) -> Result<Vec<Category>, Error>;

    /// Get a category by its ID.
    async fn get(&self, id: CategoryId) -> Result<Option<Category>, Error>;

    /// Create a new category with the next available ID and add it to the store.
    async fn add(&self, name: CategoryName) -> Result<Category, Error>;

    /// Replace the name of the category with `id` and return the updated category.
    async fn update(&self, id: CategoryId, name: CategoryName)
    -> Result<Option<Category>, Error>;

    /// Remove the category with `id` and return it as it was before removal.
    ///
    /// Expenses that refer to the category are left as they are.
    async fn delete(&self, id: CategoryId) -> Result<Option<Category>, Error>;
}

/// The state needed by the category endpoints.
#[derive(Clone)]
pub struct CategoryState {
    pub category_store: Arc<dyn CategoryStore>,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            category_store: state.category_store.clone(),
        }
    }
}
