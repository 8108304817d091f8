use async_trait::async_trait;

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName, CategoryStore},
    expense::{Expense, ExpenseId, ExpensePatch, ExpenseStore, NewExpense},
};

/// A store whose backing database is always unreachable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingStore;

fn unreachable_database<T>() -> Result<T, Error> {
    Err(Error::BackingStoreRequest("connection refused".to_owned()))
}

#[async_trait]
impl CategoryStore for FailingStore {
    async fn list(&self) -> Result<Vec<Category>, Error> {
        unreachable_database()
    }

    async fn get(&self, _id: CategoryId) -> Result<Option<Category>, Error> {
        unreachable_database()
    }

    async fn add(&self, _name: CategoryName) -> Result<Category, Error> {
        unreachable_database()
    }

    async fn update(
        &self,
        _id: CategoryId,
        _name: CategoryName,
    ) -> Result<Option<Category>, Error> {
        unreachable_database()
    }

    async fn delete(&self, _id: CategoryId) -> Result<Option<Category>, Error> {
        unreachable_database()
    }
}

#[async_trait]
impl ExpenseStore for FailingStore {
    async fn list(&self) -> Result<Vec<Expense>, Error> {
        unreachable_database()
    }

    async fn get(&self, _id: ExpenseId) -> Result<Option<Expense>, Error> {
        unreachable_database()
    }

    async fn add(&self, _expense: NewExpense) -> Result<Expense, Error> {
        unreachable_database()
    }

    async fn update(
        &self,
        _id: ExpenseId,
        _patch: ExpensePatch,
    ) -> Result<Option<Expense>, Error> {
        unreachable_database()
    }

    async fn delete(&self, _id: ExpenseId) -> Result<Option<Expense>, Error> {
        unreachable_database()
    }
}
