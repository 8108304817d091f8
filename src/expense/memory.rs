//! Implements an expense store that keeps expenses in memory.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{
    Error,
    expense::{Expense, ExpenseId, ExpensePatch, ExpenseStore, NewExpense},
};

/// Keeps expenses in memory for the lifetime of the process.
///
/// Clones share the same expenses.
#[derive(Debug, Clone)]
pub struct InMemoryExpenseStore {
    state: Arc<Mutex<ExpenseList>>,
}

#[derive(Debug)]
struct ExpenseList {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl InMemoryExpenseStore {
    /// Create an empty store. The first expense gets the ID 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ExpenseList {
                expenses: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ExpenseList>, Error> {
        self.state
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
            .map_err(|_| Error::StoreLock)
    }
}

impl Default for InMemoryExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    /// Get all expenses in the order they were added.
    async fn list(&self) -> Result<Vec<Expense>, Error> {
        Ok(self.lock()?.expenses.clone())
    }

    async fn get(&self, id: ExpenseId) -> Result<Option<Expense>, Error> {
        Ok(self
            .lock()?
            .expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned())
    }

    async fn add(&self, expense: NewExpense) -> Result<Expense, Error> {
        let mut list = self.lock()?;
        let expense = expense.into_expense(list.next_id);

        list.next_id += 1;
        list.expenses.push(expense.clone());

        Ok(expense)
    }

    async fn update(&self, id: ExpenseId, patch: ExpensePatch) -> Result<Option<Expense>, Error> {
        Ok(self
            .lock()?
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .map(|expense| {
                patch.apply_to(expense);
                expense.clone()
            }))
    }

    async fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, Error> {
        let mut list = self.lock()?;
        let position = list.expenses.iter().position(|expense| expense.id == id);

        Ok(position.map(|index| list.expenses.remove(index)))
    }
}
