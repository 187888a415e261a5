//! Types that represent the core data model, such as `Sheet`, `Category` and `Txn`.
mod amount;
mod category;
mod sheet;
mod transaction;

pub use amount::{Amount, AmountError};
pub use category::Category;
pub use sheet::{Sheet, UNCATEGORIZED};
pub use transaction::{Txn, TxnKind};
