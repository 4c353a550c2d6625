//! Ledger application services.
//!
//! Orchestrate domain operations through the repository port.
//! Contain NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use banking_types::{
    Account, AccountSummary, AppError, CreateAccountRequest, LedgerRepository, PostedTransaction,
    Transaction, TransactionStatus,
};

/// Account lookup and creation service.
///
/// Generic over `R: LedgerRepository` - the adapter is injected at
/// construction time, no ambient registry.
pub struct AccountService<R: LedgerRepository> {
    repo: Arc<R>,
}

// Manual Clone: `R` itself need not be Clone, only the Arc is cloned.
impl<R: LedgerRepository> Clone for AccountService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: LedgerRepository> AccountService<R> {
    /// Creates a new account service with the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Finds the account matching the number.
    ///
    /// Returns `None` when no such account exists - absence is a sentinel
    /// here, not an error; callers decide how to surface it.
    pub async fn find_account(&self, account_number: &str) -> Result<Option<Account>, AppError> {
        tracing::info!(account_number, "find_account");
        self.repo
            .find_account(account_number)
            .await
            .map_err(Into::into)
    }

    /// Creates a new account with zero balance.
    ///
    /// Rejects account numbers that are already in use.
    pub async fn create_account(
        &self,
        req: CreateAccountRequest,
    ) -> Result<AccountSummary, AppError> {
        tracing::info!(account_number = %req.account_number, owner = %req.owner, "create_account");

        if self.find_account(&req.account_number).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Account number already in use: {}",
                req.account_number
            )));
        }

        let account = Account::new(req.owner, req.account_number)?;
        self.repo.create_account(&account).await?;

        Ok(AccountSummary {
            owner: account.owner,
            account_number: account.account_number,
        })
    }
}

/// Transaction posting service.
///
/// Resolves the account, applies the transaction to its balance and
/// persists both in one atomic repository call.
pub struct TransactionService<R: LedgerRepository> {
    accounts: AccountService<R>,
    repo: Arc<R>,
}

impl<R: LedgerRepository> TransactionService<R> {
    /// Creates a new transaction service sharing the account service's repository.
    pub fn new(accounts: AccountService<R>, repo: Arc<R>) -> Self {
        Self { accounts, repo }
    }

    /// Posts a draft transaction against the given account.
    ///
    /// An absent account and a non-positive amount both fail the write as a
    /// bad request; the balance check inside `Account::post` surfaces as
    /// `InsufficientBalance`. On success the returned status carries the
    /// generated approval code.
    pub async fn save_transaction(
        &self,
        account_number: &str,
        transaction: Transaction,
    ) -> Result<TransactionStatus, AppError> {
        tracing::info!(
            account_number,
            kind = %transaction.kind,
            amount = transaction.amount,
            "save_transaction"
        );

        let mut account = self
            .accounts
            .find_account(account_number)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Account not found: {}", account_number))
            })?;

        if transaction.amount <= 0 {
            return Err(AppError::BadRequest(format!(
                "Amount must be positive: {}",
                transaction.amount
            )));
        }

        account.post(&transaction)?;

        let posted = transaction.into_posted(
            account.account_number.clone(),
            Uuid::new_v4().to_string(),
            Utc::now(),
        );
        self.repo.save_posting(&account, &posted).await?;

        Ok(TransactionStatus::ok(posted.approval_code))
    }

    /// Lists the posted transactions of an account in posting order.
    pub async fn list_transactions(
        &self,
        account_number: &str,
    ) -> Result<Vec<PostedTransaction>, AppError> {
        self.repo
            .list_transactions(account_number)
            .await
            .map_err(Into::into)
    }
}
