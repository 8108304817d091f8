//! Implements a category store backed by the `categories` table of a remote database.

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    Error, RemoteDatabase,
    category::{Category, CategoryId, CategoryName, CategoryStore},
};

const CATEGORY_TABLE: &str = "categories";

#[derive(Serialize)]
struct CategoryRow<'a> {
    name: &'a str,
}

/// Creates, retrieves, renames and deletes categories in a remote database.
///
/// IDs are generated by the database.
#[derive(Debug, Clone)]
pub struct RemoteCategoryStore {
    database: RemoteDatabase,
}

impl RemoteCategoryStore {
    /// Create a new category store with a remote database.
    pub fn new(database: RemoteDatabase) -> Self {
        Self { database }
    }
}

#[async_trait]
impl CategoryStore for RemoteCategoryStore {
    /// Get all categories ordered by ID.
    ///
    /// # Errors
    /// This function will return an error if the request to the database fails.
    async fn list(&self) -> Result<Vec<Category>, Error> {
        self.database.select_all(CATEGORY_TABLE).await
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        self.database.select_by_id(CATEGORY_TABLE, id).await
    }

    async fn add(&self, name: CategoryName) -> Result<Category, Error> {
        let row = CategoryRow {
            name: name.as_ref(),
        };

        self.database.insert(CATEGORY_TABLE, &row).await
    }

    async fn update(
        &self,
        id: CategoryId,
        name: CategoryName,
    ) -> Result<Option<Category>, Error> {
        let row = CategoryRow {
            name: name.as_ref(),
        };

        self.database.update_by_id(CATEGORY_TABLE, id, &row).await
    }

    async fn delete(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        self.database.delete_by_id(CATEGORY_TABLE, id).await
    }
}
