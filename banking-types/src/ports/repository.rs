//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite, in-memory test doubles) implement this trait.

use crate::domain::{Account, PostedTransaction};
use crate::error::RepoError;

/// The main repository port for ledger operations.
///
/// `save_posting` MUST be atomic: the balance update and the transaction
/// record are written inside one database transaction so a partial failure
/// can never leave a mutated balance with no corresponding record.
#[async_trait::async_trait]
pub trait LedgerRepository: Send + Sync + 'static {
    /// Persists a freshly created account.
    ///
    /// Fails with [`RepoError::Conflict`] if the account number is taken.
    async fn create_account(&self, account: &Account) -> Result<(), RepoError>;

    /// Finds an account by its account number. Absence is not an error.
    async fn find_account(&self, account_number: &str) -> Result<Option<Account>, RepoError>;

    /// Persists an updated balance together with the posted transaction
    /// record, as one atomic unit.
    async fn save_posting(
        &self,
        account: &Account,
        posted: &PostedTransaction,
    ) -> Result<(), RepoError>;

    /// Lists the posted transactions of an account in posting order.
    async fn list_transactions(
        &self,
        account_number: &str,
    ) -> Result<Vec<PostedTransaction>, RepoError>;
}
