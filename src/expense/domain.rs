//! Core expense domain types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::category::CategoryId;

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// Money spent on a given date, filed under a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// The amount spent. No currency is attached and negative amounts are allowed.
    pub amount: f64,
    /// The category the expense is filed under.
    ///
    /// This ID is not checked against the category store, so it may refer to
    /// a category that never existed or has since been deleted.
    pub category_id: CategoryId,
    /// The date as given by the client, e.g. "2024-01-01". The format is not checked.
    pub date: String,
    /// A free-form note, empty when none was given.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// The fields of an expense that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// The amount spent.
    pub amount: f64,
    /// The category the expense is filed under.
    pub category_id: CategoryId,
    /// The date the money was spent.
    pub date: String,
    /// Stored as an empty string when missing.
    #[serde(default)]
    pub description: Option<String>,
}

impl NewExpense {
    /// Create the stored form of this expense with the given `id`.
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category_id: self.category_id,
            date: self.date,
            description: self.description.unwrap_or_default(),
        }
    }
}

/// A partial update to an expense.
///
/// Each field is either supplied (`Some`) or absent (`None`). Absent fields,
/// whether omitted from the request body or sent as `null`, keep their stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpensePatch {
    /// The new amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// The new category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// The new date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// The new description. An empty string clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExpensePatch {
    /// Whether the patch leaves every field unchanged.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category_id.is_none()
            && self.date.is_none()
            && self.description.is_none()
    }

    /// Overwrite the fields of `expense` that this patch supplies.
    pub fn apply_to(self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }

        if let Some(category_id) = self.category_id {
            expense.category_id = category_id;
        }

        if let Some(date) = self.date {
            expense.date = date;
        }

        if let Some(description) = self.description {
            expense.description = description;
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
