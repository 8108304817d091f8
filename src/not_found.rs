//! Responses for requests that name a record or route that does not exist.

use axum::{http::StatusCode, response::Response};

use crate::shared_responses::render_detail;

/// The detail sent when a category ID does not match a stored category.
pub const CATEGORY_NOT_FOUND: &str = "Category not found";
/// The detail sent when an expense ID does not match a stored expense.
pub const EXPENSE_NOT_FOUND: &str = "Expense not found";

/// Fallback handler for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response("Not Found")
}

pub fn get_404_not_found_response(detail: &str) -> Response {
    render_detail(StatusCode::NOT_FOUND, detail)
}
