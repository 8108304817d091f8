//! Defines the expense store trait.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRef;

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseId, ExpensePatch, NewExpense},
};

/// Handles the creation, retrieval, update and removal of expenses.
///
/// A missing expense is reported as `Ok(None)`. An `Err` always means the
/// store itself failed and must be passed on to the caller.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Get all expenses.
    async fn list(&self) -> Result<Vec<Expense>, Error>;

    /// Get an expense by its ID.
    async fn get(&self, id: ExpenseId) -> Result<Option<Expense>, Error>;

    /// Store a new expense under the next available ID.
    async fn add(&self, expense: NewExpense) -> Result<Expense, Error>;

    /// Merge `patch` into the expense with `id` and return the updated expense.
    ///
    /// Fields that `patch` does not supply keep their stored value.
    async fn update(&self, id: ExpenseId, patch: ExpensePatch) -> Result<Option<Expense>, Error>;

    /// Remove the expense with `id` and return it as it was before removal.
    async fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, Error>;
}

/// The state needed by the expense endpoints.
#[derive(Clone)]
pub struct ExpenseState {
    pub expense_store: Arc<dyn ExpenseStore>,
}

impl FromRef<AppState> for ExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}
