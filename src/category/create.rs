//! Category creation endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryName, CategoryState, domain::CategoryFormData},
};

/// Handle a new category. Responds with the stored category and its new ID.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    Json(form_data): Json<CategoryFormData>,
) -> Result<Response, Error> {
    let name = CategoryName::new(&form_data.name)?;
    let category = state.category_store.add(name).await?;

    tracing::debug!("created category {}", category.id);

    Ok((StatusCode::CREATED, Json(category)).into_response())
}
