//! Category deletion endpoint.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryId, CategoryState},
    not_found::{CATEGORY_NOT_FOUND, get_404_not_found_response},
    shared_responses::DeleteAcknowledgement,
};

/// Handle category deletion.
///
/// Expenses filed under the category are not touched and keep referring to
/// the deleted category's ID.
pub async fn delete_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryState>,
) -> Result<Response, Error> {
    match state.category_store.delete(category_id).await? {
        Some(category) => {
            tracing::debug!("deleted category {} ({})", category.id, category.name);
            Ok(DeleteAcknowledgement { success: true }.into_response())
        }
        None => Ok(get_404_not_found_response(CATEGORY_NOT_FOUND)),
    }
}
