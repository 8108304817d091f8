//! Implements a struct that holds the state of the REST server.

use std::{path::PathBuf, sync::Arc};

use crate::{
    CategoryStore, Config, Error, ExpenseStore, IdentityService, InMemoryCategoryStore,
    InMemoryExpenseStore, RemoteCategoryStore, RemoteDatabase, RemoteExpenseStore, StoreBackend,
};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The store for categories.
    pub category_store: Arc<dyn CategoryStore>,

    /// The store for expenses.
    pub expense_store: Arc<dyn ExpenseStore>,

    /// Checks bearer tokens on the category and expense routes.
    /// The routes are open when this is `None`.
    pub identity_service: Option<IdentityService>,

    /// Directory that `index.html` and other static files are served from.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] from a pair of stores, without an identity gate.
    pub fn new(
        category_store: Arc<dyn CategoryStore>,
        expense_store: Arc<dyn ExpenseStore>,
    ) -> Self {
        Self {
            category_store,
            expense_store,
            identity_service: None,
            static_dir: PathBuf::from("static"),
        }
    }

    /// Create a new [AppState] that keeps records in memory.
    ///
    /// The category store starts with the default categories and the expense
    /// store starts empty.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCategoryStore::new()),
            Arc::new(InMemoryExpenseStore::new()),
        )
    }

    /// Create a new [AppState] that keeps records in `database`.
    pub fn remote(database: RemoteDatabase) -> Self {
        Self::new(
            Arc::new(RemoteCategoryStore::new(database.clone())),
            Arc::new(RemoteExpenseStore::new(database)),
        )
    }

    /// Require a bearer token accepted by `identity_service` on the category
    /// and expense routes.
    pub fn with_identity_service(mut self, identity_service: IdentityService) -> Self {
        self.identity_service = Some(identity_service);
        self
    }

    /// Serve static files from `static_dir`.
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    /// Build the state described by `config`.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if the remote store or identity service
    /// is selected but not fully configured.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let state = match config.store {
            StoreBackend::Memory => Self::in_memory(),
            StoreBackend::Remote => Self::remote(config.remote_database()?),
        };
        let state = state.with_static_dir(&config.static_dir);

        Ok(match config.identity_service()? {
            Some(identity_service) => state.with_identity_service(identity_service),
            None => state,
        })
    }
}
