//! Expense update endpoint.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    expense::{ExpenseId, ExpensePatch, ExpenseState},
    not_found::{EXPENSE_NOT_FOUND, get_404_not_found_response},
};

/// Handle a partial update of an expense.
///
/// Only the fields present (and not `null`) in the request body are changed.
/// Responds with the updated expense, or 404 if there is no expense with
/// `expense_id`.
pub async fn update_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<ExpenseState>,
    Json(patch): Json<ExpensePatch>,
) -> Result<Response, Error> {
    match state.expense_store.update(expense_id, patch).await? {
        Some(expense) => Ok(Json(expense).into_response()),
        None => Ok(get_404_not_found_response(EXPENSE_NOT_FOUND)),
    }
}
