//! The API endpoints URIs.
//!
//! Endpoints that take a parameter, e.g., '/expenses/{expense_id}', are
//! matched by axum's path extractor.

/// The root route which serves the single page front end.
pub const ROOT: &str = "/";
/// The route for static files.
pub const STATIC: &str = "/static";
/// The route for checking that the server is up.
pub const PING: &str = "/ping";

/// The route to list and create categories.
pub const CATEGORIES: &str = "/categories";
/// The route to get, update and delete a single category.
pub const CATEGORY: &str = "/categories/{category_id}";
/// The route to list and create expenses.
pub const EXPENSES: &str = "/expenses";
/// The route to get, update and delete a single expense.
pub const EXPENSE: &str = "/expenses/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
