//! Expense listing and lookup endpoints.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    expense::{ExpenseId, ExpenseState},
    not_found::{EXPENSE_NOT_FOUND, get_404_not_found_response},
};

/// Respond with every expense.
pub async fn list_expenses_endpoint(State(state): State<ExpenseState>) -> Result<Response, Error> {
    let expenses = state.expense_store.list().await?;

    Ok(Json(expenses).into_response())
}

/// Respond with the expense with `expense_id`, or 404 if there is none.
pub async fn get_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<ExpenseState>,
) -> Result<Response, Error> {
    match state.expense_store.get(expense_id).await? {
        Some(expense) => Ok(Json(expense).into_response()),
        None => Ok(get_404_not_found_response(EXPENSE_NOT_FOUND)),
    }
}
