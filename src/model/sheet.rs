use crate::model::{Amount, Category, Txn, TxnKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The display label for a transaction whose category reference is absent or
/// no longer resolves.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A named ledger containing categories and transactions.
///
/// The sheet is the unit of persistence. Transactions keep their insertion
/// order, which is the user's entry order. Mutation happens through explicit
/// command methods; both collections are append-only.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Sheet {
    id: Uuid,
    name: String,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    transactions: Vec<Txn>,
}

impl Sheet {
    /// Creates an empty sheet with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            categories: Vec::new(),
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transactions(&self) -> &[Txn] {
        &self.transactions
    }

    /// Appends a new category and returns its id. Existing entries are never
    /// removed or renamed, and duplicate names are not an error.
    pub fn add_category(&mut self, name: impl Into<String>) -> Uuid {
        let category = Category::new(name);
        let id = category.id();
        self.categories.push(category);
        id
    }

    /// Appends a new transaction and returns its id. A `None` date means
    /// "now". The `category_id` is not checked against the category list; a
    /// dangling reference is valid and renders as [`UNCATEGORIZED`].
    pub fn add_transaction(
        &mut self,
        category_id: Option<Uuid>,
        description: impl Into<String>,
        amount: Amount,
        kind: TxnKind,
        date: Option<DateTime<Utc>>,
    ) -> Uuid {
        let txn = Txn::new(category_id, description, amount, kind, date);
        let id = txn.id();
        self.transactions.push(txn);
        id
    }

    /// Resolves a category id within this sheet. The weak reference held by a
    /// transaction must go through this lookup; there are no direct pointers
    /// between entities.
    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// The display name for a transaction's category reference, falling back
    /// to [`UNCATEGORIZED`] when the reference is absent or dangling.
    pub fn category_name(&self, category_id: Option<Uuid>) -> &str {
        category_id
            .and_then(|id| self.category(id))
            .map(Category::name)
            .unwrap_or(UNCATEGORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_sheet_is_empty() {
        let sheet = Sheet::new("Household");
        assert_eq!(sheet.name(), "Household");
        assert!(sheet.categories().is_empty());
        assert!(sheet.transactions().is_empty());
    }

    #[test]
    fn test_add_category_appends() {
        let mut sheet = Sheet::new("s");
        let groceries = sheet.add_category("Groceries");
        let rent = sheet.add_category("Rent");
        assert_ne!(groceries, rent);
        let names: Vec<&str> = sheet.categories().iter().map(Category::name).collect();
        assert_eq!(names, vec!["Groceries", "Rent"]);
    }

    #[test]
    fn test_duplicate_category_names_are_allowed() {
        let mut sheet = Sheet::new("s");
        let a = sheet.add_category("Misc");
        let b = sheet.add_category("Misc");
        assert_ne!(a, b);
        assert_eq!(sheet.categories().len(), 2);
    }

    #[test]
    fn test_add_transaction_keeps_entry_order() {
        let mut sheet = Sheet::new("s");
        let amount = Amount::from_str("1").unwrap();
        sheet.add_transaction(None, "first", amount, TxnKind::Income, None);
        sheet.add_transaction(None, "second", amount, TxnKind::Expense, None);
        let descriptions: Vec<&str> = sheet
            .transactions()
            .iter()
            .map(Txn::description)
            .collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }

    #[test]
    fn test_category_name_resolves() {
        let mut sheet = Sheet::new("s");
        let id = sheet.add_category("Groceries");
        assert_eq!(sheet.category_name(Some(id)), "Groceries");
    }

    #[test]
    fn test_category_name_sentinel_for_none_and_dangling() {
        let sheet = Sheet::new("s");
        assert_eq!(sheet.category_name(None), UNCATEGORIZED);
        assert_eq!(sheet.category_name(Some(Uuid::new_v4())), UNCATEGORIZED);
        assert!(sheet.category(Uuid::new_v4()).is_none());
    }
}
