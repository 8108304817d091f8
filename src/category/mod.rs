//! Categories that expenses are filed under.

mod create;
mod delete;
mod domain;
mod edit;
mod list;
mod memory;
mod remote;
mod store;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryId, CategoryName};
pub use edit::update_category_endpoint;
pub use list::{get_category_endpoint, list_categories_endpoint};
pub use memory::{DEFAULT_CATEGORIES, InMemoryCategoryStore};
pub use remote::RemoteCategoryStore;
pub use store::{CategoryState, CategoryStore};
