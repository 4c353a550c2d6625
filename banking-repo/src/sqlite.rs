//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use banking_types::{
    Account, LedgerRepository, PostedTransaction, RepoError, TransactionKind,
};

use crate::types::{DbAccount, DbTransaction};

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl LedgerRepository for SqliteRepo {
    async fn create_account(&self, account: &Account) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO accounts (account_number, owner, balance, created_at) VALUES (?, ?, ?, ?)"#,
        )
        .bind(&account.account_number)
        .bind(&account.owner)
        .bind(account.balance)
        .bind(account.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                RepoError::Conflict(format!(
                    "Account number already in use: {}",
                    account.account_number
                ))
            } else {
                RepoError::Database(e.to_string())
            }
        })?;

        Ok(())
    }

    async fn find_account(&self, account_number: &str) -> Result<Option<Account>, RepoError> {
        let row: Option<DbAccount> = sqlx::query_as(
            r#"SELECT account_number, owner, balance, created_at FROM accounts WHERE account_number = ?"#,
        )
        .bind(account_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbAccount::into_domain).transpose()
    }

    async fn save_posting(
        &self,
        account: &Account,
        posted: &PostedTransaction,
    ) -> Result<(), RepoError> {
        let payee = match &posted.kind {
            TransactionKind::BillPayment { payee } => Some(payee.as_str()),
            _ => None,
        };

        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        let result = sqlx::query(r#"UPDATE accounts SET balance = ? WHERE account_number = ?"#)
            .bind(account.balance)
            .bind(&account.account_number)
            .execute(&mut *db_tx)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        sqlx::query(
            r#"INSERT INTO transactions (id, account_number, kind, amount, payee, approval_code, posted_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(posted.id.to_string())
        .bind(&posted.account_number)
        .bind(posted.kind.name())
        .bind(posted.amount)
        .bind(payee)
        .bind(&posted.approval_code)
        .bind(posted.date.to_rfc3339())
        .execute(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        db_tx
            .commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        Ok(())
    }

    async fn list_transactions(
        &self,
        account_number: &str,
    ) -> Result<Vec<PostedTransaction>, RepoError> {
        let rows: Vec<DbTransaction> = sqlx::query_as(
            r#"SELECT id, account_number, kind, amount, payee, approval_code, posted_at
               FROM transactions WHERE account_number = ?
               ORDER BY rowid"#,
        )
        .bind(account_number)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbTransaction::into_domain).collect()
    }
}
