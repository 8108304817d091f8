//! Expense creation endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    expense::{ExpenseState, NewExpense},
};

/// Handle a new expense. Responds with the stored expense and its new ID.
pub async fn create_expense_endpoint(
    State(state): State<ExpenseState>,
    Json(new_expense): Json<NewExpense>,
) -> Result<Response, Error> {
    let expense = state.expense_store.add(new_expense).await?;

    tracing::debug!("created expense {}", expense.id);

    Ok((StatusCode::CREATED, Json(expense)).into_response())
}
