//! Database row types and conversions to domain types.

use sqlx::FromRow;

use banking_types::{
    Account, PostedTransaction, RepoError, TransactionId, TransactionKind,
};

/// Account row from database.
#[derive(FromRow)]
pub struct DbAccount {
    pub account_number: String,
    pub owner: String,
    pub balance: i64,
    pub created_at: String,
}

impl DbAccount {
    /// Convert database row to domain Account.
    pub fn into_domain(self) -> Result<Account, RepoError> {
        let created_at = parse_datetime(&self.created_at)?;
        Ok(Account::from_parts(
            self.account_number,
            self.owner,
            self.balance,
            created_at,
        ))
    }
}

/// Transaction row from database.
#[derive(FromRow)]
pub struct DbTransaction {
    pub id: String,
    pub account_number: String,
    pub kind: String,
    pub amount: i64,
    pub payee: Option<String>,
    pub approval_code: String,
    pub posted_at: String,
}

impl DbTransaction {
    /// Convert database row to domain PostedTransaction.
    pub fn into_domain(self) -> Result<PostedTransaction, RepoError> {
        let id = uuid::Uuid::parse_str(&self.id)
            .map(TransactionId::from_uuid)
            .map_err(|e| RepoError::Database(e.to_string()))?;
        let kind = parse_kind(&self.kind, self.payee)?;
        let posted_at = parse_datetime(&self.posted_at)?;

        Ok(PostedTransaction::from_parts(
            id,
            self.account_number,
            self.amount,
            kind,
            self.approval_code,
            posted_at,
        ))
    }
}

fn parse_datetime(s: &str) -> Result<chrono::DateTime<chrono::Utc>, RepoError> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| RepoError::Database(e.to_string()))
}

fn parse_kind(kind: &str, payee: Option<String>) -> Result<TransactionKind, RepoError> {
    match kind {
        "DEPOSIT" => Ok(TransactionKind::Deposit),
        "WITHDRAWAL" => Ok(TransactionKind::Withdrawal),
        "BILL_PAYMENT" => {
            let payee = payee.ok_or_else(|| {
                RepoError::Database("Bill payment row is missing its payee".into())
            })?;
            Ok(TransactionKind::BillPayment { payee })
        }
        _ => Err(RepoError::Database(format!(
            "Unknown transaction kind: {}",
            kind
        ))),
    }
}
