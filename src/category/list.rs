//! Category listing and lookup endpoints.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryId, CategoryState},
    not_found::{CATEGORY_NOT_FOUND, get_404_not_found_response},
};

/// Respond with every category.
pub async fn list_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Response, Error> {
    let categories = state.category_store.list().await?;

    Ok(Json(categories).into_response())
}

/// Respond with the category with `category_id`, or 404 if there is none.
pub async fn get_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryState>,
) -> Result<Response, Error> {
    match state.category_store.get(category_id).await? {
        Some(category) => Ok(Json(category).into_response()),
        None => Ok(get_404_not_found_response(CATEGORY_NOT_FOUND)),
    }
}
