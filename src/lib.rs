mod error;
pub mod export;
mod fs;
pub mod logging;
pub mod model;
pub mod report;
pub mod store;

pub use error::Error;
pub use error::Result;
pub use model::{Amount, Category, Sheet, Txn, TxnKind};
pub use store::SheetStore;
