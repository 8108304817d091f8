//! Implements a category store that keeps categories in memory.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName, CategoryStore},
};

/// The categories every new in-memory store starts with, at IDs 1, 2 and 3.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Food", "Transport", "Utilities"];

/// Keeps categories in memory for the lifetime of the process.
///
/// Clones share the same categories.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryStore {
    state: Arc<Mutex<CategoryList>>,
}

#[derive(Debug)]
struct CategoryList {
    categories: Vec<Category>,
    next_id: CategoryId,
}

impl InMemoryCategoryStore {
    /// Create a store seeded with the [DEFAULT_CATEGORIES].
    pub fn new() -> Self {
        let categories: Vec<Category> = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(name, id)| Category {
                id,
                name: CategoryName::new_unchecked(name),
            })
            .collect();
        let next_id = categories.len() as CategoryId + 1;

        Self {
            state: Arc::new(Mutex::new(CategoryList {
                categories,
                next_id,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CategoryList>, Error> {
        self.state
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire category store lock: {error}"))
            .map_err(|_| Error::StoreLock)
    }
}

impl Default for InMemoryCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    /// Get all categories in the order they were added.
    async fn list(&self) -> Result<Vec<Category>, Error> {
        Ok(self.lock()?.categories.clone())
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        Ok(self
            .lock()?
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    async fn add(&self, name: CategoryName) -> Result<Category, Error> {
        let mut list = self.lock()?;
        let category = Category {
            id: list.next_id,
            name,
        };

        list.next_id += 1;
        list.categories.push(category.clone());

        Ok(category)
    }

    async fn update(
        &self,
        id: CategoryId,
        name: CategoryName,
    ) -> Result<Option<Category>, Error> {
        Ok(self
            .lock()?
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .map(|category| {
                category.name = name;
                category.clone()
            }))
    }

    async fn delete(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        let mut list = self.lock()?;
        let position = list.categories.iter().position(|category| category.id == id);

        Ok(position.map(|index| list.categories.remove(index)))
    }
}
