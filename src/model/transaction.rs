use crate::model::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense entry in a sheet.
///
/// The stored `amount` carries no sign of its own; the cash effect is carried
/// by `kind`. The `category_id` is a weak reference: it may point at a
/// category that no longer exists in the sheet, and consumers must treat that
/// as uncategorized rather than fail.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Txn {
    id: Uuid,
    category_id: Option<Uuid>,
    description: String,
    amount: Amount,
    kind: TxnKind,
    /// Entry timestamp, used only for report bucketing. Persisted as epoch
    /// milliseconds; bucketing always uses the UTC calendar date.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    date: DateTime<Utc>,
}

impl Txn {
    /// Creates a transaction with a freshly generated id. A `None` date means
    /// "now". The amount is taken literally; negative and zero values are not
    /// rejected here.
    pub fn new(
        category_id: Option<Uuid>,
        description: impl Into<String>,
        amount: Amount,
        kind: TxnKind,
        date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            description: description.into(),
            amount,
            kind,
            date: date.unwrap_or_else(Utc::now),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn category_id(&self) -> Option<Uuid> {
        self.category_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> TxnKind {
        self.kind
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// The net cash effect of this entry: the amount for income, its negation
    /// for an expense.
    pub fn signed_amount(&self) -> Amount {
        self.kind.signed(self.amount)
    }
}

/// Discriminates credits from debits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    Income,
    Expense,
}

serde_plain::derive_display_from_serialize!(TxnKind);
serde_plain::derive_fromstr_from_deserialize!(TxnKind);

impl TxnKind {
    /// The capitalized label used in export rows.
    pub fn label(&self) -> &'static str {
        match self {
            TxnKind::Income => "Income",
            TxnKind::Expense => "Expense",
        }
    }

    /// Applies this kind's cash-effect sign to `amount`.
    pub fn signed(&self, amount: Amount) -> Amount {
        match self {
            TxnKind::Income => amount,
            TxnKind::Expense => -amount,
        }
    }
}
