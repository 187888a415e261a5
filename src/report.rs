//! Reporting views derived from a sheet's transaction list.
//!
//! Everything here is a pure function over `&[Txn]`: reports are recomputed
//! on demand and never cached or stored. Buckets are keyed by the UTC
//! calendar date of each transaction, so the same ledger produces the same
//! report on every machine regardless of its local time zone. `BTreeMap`
//! keeps bucket iteration in ascending key order.

use crate::model::{Amount, Txn, TxnKind};
use chrono::Datelike;
use std::collections::BTreeMap;
use std::fmt;

/// Income and expense sums for one reporting bucket.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Totals {
    income: Amount,
    expense: Amount,
}

impl Totals {
    /// Sum of amounts where the kind is income.
    pub fn income(&self) -> Amount {
        self.income
    }

    /// Sum of amounts where the kind is expense.
    pub fn expense(&self) -> Amount {
        self.expense
    }

    /// Income minus expense.
    pub fn net(&self) -> Amount {
        self.income - self.expense
    }

    fn add(&mut self, txn: &Txn) {
        match txn.kind() {
            TxnKind::Income => self.income += txn.amount(),
            TxnKind::Expense => self.expense += txn.amount(),
        }
    }
}

/// A (year, month) bucket key, ordered chronologically.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a bucket key from a calendar year and one-based month number.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The bucket a transaction falls into, by its UTC calendar date.
    fn of(txn: &Txn) -> Self {
        let date = txn.date();
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// One-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The net value of a transaction list: the sum of signed amounts.
pub fn net_total(transactions: &[Txn]) -> Amount {
    transactions.iter().map(Txn::signed_amount).sum()
}

/// Partitions transactions into calendar-month buckets and sums each one.
/// Every transaction lands in exactly one bucket; an empty input yields an
/// empty map.
pub fn monthly(transactions: &[Txn]) -> BTreeMap<Month, Totals> {
    let mut buckets: BTreeMap<Month, Totals> = BTreeMap::new();
    for txn in transactions {
        buckets.entry(Month::of(txn)).or_default().add(txn);
    }
    buckets
}

/// Same partition as [`monthly`] with a coarser, per-year bucket.
pub fn yearly(transactions: &[Txn]) -> BTreeMap<i32, Totals> {
    let mut buckets: BTreeMap<i32, Totals> = BTreeMap::new();
    for txn in transactions {
        buckets.entry(txn.date().year()).or_default().add(txn);
    }
    buckets
}
