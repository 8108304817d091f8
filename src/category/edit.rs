//! Category rename endpoint.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryId, CategoryName, CategoryState, domain::CategoryFormData},
    not_found::{CATEGORY_NOT_FOUND, get_404_not_found_response},
};

/// Handle a category rename. Responds with the updated category, or 404 if
/// there is no category with `category_id`.
pub async fn update_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryState>,
    Json(form_data): Json<CategoryFormData>,
) -> Result<Response, Error> {
    let name = CategoryName::new(&form_data.name)?;

    match state.category_store.update(category_id, name).await? {
        Some(category) => Ok(Json(category).into_response()),
        None => Ok(get_404_not_found_response(CATEGORY_NOT_FOUND)),
    }
}
