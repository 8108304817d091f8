//! Expense deletion endpoint.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    expense::{ExpenseId, ExpenseState},
    not_found::{EXPENSE_NOT_FOUND, get_404_not_found_response},
    shared_responses::DeleteAcknowledgement,
};

/// Handle expense deletion.
pub async fn delete_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<ExpenseState>,
) -> Result<Response, Error> {
    match state.expense_store.delete(expense_id).await? {
        Some(expense) => {
            tracing::debug!("deleted expense {}", expense.id);
            Ok(DeleteAcknowledgement { success: true }.into_response())
        }
        None => Ok(get_404_not_found_response(EXPENSE_NOT_FOUND)),
    }
}
