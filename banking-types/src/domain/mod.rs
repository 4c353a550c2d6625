//! Domain models for the banking ledger.

pub mod account;
pub mod transaction;

pub use account::Account;
pub use transaction::{PostedTransaction, Transaction, TransactionId, TransactionKind};
