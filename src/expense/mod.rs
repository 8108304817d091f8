//! Expenses: money spent on a date, filed under a category.

mod create;
mod delete;
mod domain;
mod edit;
mod list;
mod memory;
mod remote;
mod store;

pub use create::create_expense_endpoint;
pub use delete::delete_expense_endpoint;
pub use domain::{Expense, ExpenseId, ExpensePatch, NewExpense};
pub use edit::update_expense_endpoint;
pub use list::{get_expense_endpoint, list_expenses_endpoint};
pub use memory::InMemoryExpenseStore;
pub use remote::RemoteExpenseStore;
pub use store::{ExpenseState, ExpenseStore};
