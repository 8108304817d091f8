//! Implements an expense store backed by the `expenses` table of a remote database.

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    Error, RemoteDatabase,
    category::CategoryId,
    expense::{Expense, ExpenseId, ExpensePatch, ExpenseStore, NewExpense},
};

const EXPENSE_TABLE: &str = "expenses";

#[derive(Serialize)]
struct ExpenseRow<'a> {
    amount: f64,
    category_id: CategoryId,
    date: &'a str,
    description: &'a str,
}

/// Creates, retrieves, updates and deletes expenses in a remote database.
///
/// IDs are generated by the database.
#[derive(Debug, Clone)]
pub struct RemoteExpenseStore {
    database: RemoteDatabase,
}

impl RemoteExpenseStore {
    /// Create a new expense store with a remote database.
    pub fn new(database: RemoteDatabase) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ExpenseStore for RemoteExpenseStore {
    /// Get all expenses ordered by ID.
    ///
    /// # Errors
    /// This function will return an error if the request to the database fails.
    async fn list(&self) -> Result<Vec<Expense>, Error> {
        self.database.select_all(EXPENSE_TABLE).await
    }

    async fn get(&self, id: ExpenseId) -> Result<Option<Expense>, Error> {
        self.database.select_by_id(EXPENSE_TABLE, id).await
    }

    async fn add(&self, expense: NewExpense) -> Result<Expense, Error> {
        let row = ExpenseRow {
            amount: expense.amount,
            category_id: expense.category_id,
            date: &expense.date,
            description: expense.description.as_deref().unwrap_or_default(),
        };

        self.database.insert(EXPENSE_TABLE, &row).await
    }

    /// Send only the supplied fields so the database keeps the others.
    async fn update(&self, id: ExpenseId, patch: ExpensePatch) -> Result<Option<Expense>, Error> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        self.database.update_by_id(EXPENSE_TABLE, id, &patch).await
    }

    async fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, Error> {
        self.database.delete_by_id(EXPENSE_TABLE, id).await
    }
}

#[cfg(test)]
mod remote_expense_store_tests {
    use serde_json::json;

    use crate::{
        Error,
        expense::{Expense, ExpensePatch, ExpenseStore, NewExpense},
        test_utils::FakeRestServer,
    };

    use super::RemoteExpenseStore;

    async fn get_test_store() -> (FakeRestServer, RemoteExpenseStore) {
        let server = FakeRestServer::spawn().await;
        let store = RemoteExpenseStore::new(server.database());

        (server, store)
    }

    fn lunch() -> NewExpense {
        NewExpense {
            amount: 12.5,
            category_id: 1,
            date: "2024-01-01".to_owned(),
            description: None,
        }
    }

    #[tokio::test]
    async fn add_sends_empty_description() {
        let (server, store) = get_test_store().await;

        let expense = store.add(lunch()).await.unwrap();

        assert_eq!(expense, lunch().into_expense(1));
        assert_eq!(
            server.rows("expenses"),
            vec![json!({
                "id": 1,
                "amount": 12.5,
                "category_id": 1,
                "date": "2024-01-01",
                "description": ""
            })]
        );
    }

    #[tokio::test]
    async fn update_sends_only_supplied_fields() {
        let (server, store) = get_test_store().await;
        store.add(lunch()).await.unwrap();

        let updated = store
            .update(
                1,
                ExpensePatch {
                    amount: Some(15.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated,
            Some(Expense {
                amount: 15.0,
                ..lunch().into_expense(1)
            })
        );
        assert_eq!(
            server.last_body("expenses"),
            Some(json!({ "amount": 15.0 }))
        );
    }

    #[tokio::test]
    async fn empty_update_reads_current_row() {
        let (server, store) = get_test_store().await;
        store.add(lunch()).await.unwrap();

        let updated = store.update(1, ExpensePatch::default()).await.unwrap();

        assert_eq!(updated, Some(lunch().into_expense(1)));
        assert_eq!(server.patch_count("expenses"), 0);
    }

    #[tokio::test]
    async fn update_missing_expense_returns_none() {
        let (_server, store) = get_test_store().await;

        let updated = store
            .update(
                4,
                ExpensePatch {
                    date: Some("2024-02-02".to_owned()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(updated, Ok(None));
    }

    #[tokio::test]
    async fn delete_then_get_returns_none() {
        let (server, store) = get_test_store().await;
        let added = store.add(lunch()).await.unwrap();

        assert_eq!(store.delete(added.id).await, Ok(Some(added.clone())));
        assert_eq!(store.get(added.id).await, Ok(None));
        assert!(server.rows("expenses").is_empty());
    }

    #[tokio::test]
    async fn list_reads_null_description_as_empty() {
        let (server, store) = get_test_store().await;
        server.seed(
            "expenses",
            vec![json!({
                "amount": 3.0,
                "category_id": 2,
                "date": "2024-03-03",
                "description": null
            })],
        );

        let expenses = store.list().await.unwrap();

        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].description, "");
    }

    #[tokio::test]
    async fn malformed_rows_are_a_response_error() {
        let (server, store) = get_test_store().await;
        server.seed("expenses", vec![json!({ "amount": "lots" })]);

        let got = store.list().await;

        assert!(matches!(got, Err(Error::BackingStoreResponse(_))));
    }
}
