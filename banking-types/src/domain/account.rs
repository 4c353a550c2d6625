//! Account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};
use crate::error::DomainError;

/// A balance-holding account identified by a unique account number.
///
/// Balances are stored in minor currency units (cents) to avoid
/// floating-point precision issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account number (business key)
    pub account_number: String,
    /// Name of the account holder
    pub owner: String,
    /// Current balance in minor currency units
    pub balance: i64,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with zero balance.
    ///
    /// # Validation
    /// - Owner and account number cannot be empty
    pub fn new(owner: String, account_number: String) -> Result<Self, DomainError> {
        if owner.trim().is_empty() {
            return Err(DomainError::Validation("Owner cannot be empty".into()));
        }
        if account_number.trim().is_empty() {
            return Err(DomainError::Validation(
                "Account number cannot be empty".into(),
            ));
        }

        Ok(Self {
            account_number,
            owner,
            balance: 0,
            created_at: Utc::now(),
        })
    }

    /// Creates an account with all fields specified (for database reconstruction).
    pub fn from_parts(
        account_number: String,
        owner: String,
        balance: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            account_number,
            owner,
            balance,
            created_at,
        }
    }

    /// Deposits (adds) money into the account.
    ///
    /// A zero amount is accepted and leaves the balance unchanged.
    pub fn deposit(&mut self, amount: i64) -> Result<(), DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(DomainError::BalanceOverflow)?;
        Ok(())
    }

    /// Withdraws (subtracts) money from the account.
    ///
    /// Only the balance check lives here; callers are expected to have
    /// filtered non-positive amounts already.
    pub fn withdraw(&mut self, amount: i64) -> Result<(), DomainError> {
        if self.balance < amount {
            return Err(DomainError::InsufficientBalance {
                available: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Applies a transaction's effect to the balance, dispatching on its kind.
    ///
    /// Deposits credit the balance; withdrawals and bill payments debit it.
    pub fn post(&mut self, transaction: &Transaction) -> Result<(), DomainError> {
        match transaction.kind {
            TransactionKind::Deposit => self.deposit(transaction.amount),
            TransactionKind::Withdrawal | TransactionKind::BillPayment { .. } => {
                self.withdraw(transaction.amount)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new("Ada".to_string(), "A1".to_string()).unwrap()
    }

    #[test]
    fn test_account_creation() {
        let account = account();
        assert_eq!(account.owner, "Ada");
        assert_eq!(account.account_number, "A1");
        assert_eq!(account.balance, 0);
    }

    #[test]
    fn test_empty_owner_fails() {
        let result = Account::new("".to_string(), "A1".to_string());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_empty_account_number_fails() {
        let result = Account::new("Ada".to_string(), "  ".to_string());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_deposit() {
        let mut account = account();
        account.deposit(1000).unwrap();
        assert_eq!(account.balance, 1000);
    }

    #[test]
    fn test_deposit_zero_is_noop() {
        let mut account = account();
        account.deposit(500).unwrap();
        account.deposit(0).unwrap();
        assert_eq!(account.balance, 500);
    }

    #[test]
    fn test_deposit_negative_fails_and_balance_unchanged() {
        let mut account = account();
        account.deposit(500).unwrap();
        let result = account.deposit(-100);
        assert!(matches!(result, Err(DomainError::InvalidAmount(-100))));
        assert_eq!(account.balance, 500);
    }

    #[test]
    fn test_deposit_overflow_fails_and_balance_unchanged() {
        let mut account = account();
        account.deposit(i64::MAX).unwrap();
        let result = account.deposit(1);
        assert!(matches!(result, Err(DomainError::BalanceOverflow)));
        assert_eq!(account.balance, i64::MAX);
        assert!(account.balance >= 0);
    }

    #[test]
    fn test_withdraw() {
        let mut account = account();
        account.deposit(1000).unwrap();
        account.withdraw(300).unwrap();
        assert_eq!(account.balance, 700);
    }

    #[test]
    fn test_withdraw_insufficient_balance() {
        let mut account = account();
        account.deposit(100).unwrap();
        let result = account.withdraw(200);
        assert!(matches!(
            result,
            Err(DomainError::InsufficientBalance {
                available: 100,
                requested: 200,
            })
        ));
        assert_eq!(account.balance, 100);
    }

    #[test]
    fn test_post_deposit_credits() {
        let mut account = account();
        account.post(&Transaction::deposit(250)).unwrap();
        assert_eq!(account.balance, 250);
    }

    #[test]
    fn test_post_withdrawal_debits() {
        let mut account = account();
        account.post(&Transaction::deposit(1000)).unwrap();
        account.post(&Transaction::withdrawal(400)).unwrap();
        assert_eq!(account.balance, 600);
    }

    #[test]
    fn test_post_bill_payment_debits_like_withdrawal() {
        let mut account = account();
        account.post(&Transaction::deposit(100)).unwrap();
        account
            .post(&Transaction::bill_payment("Electric Co".to_string(), 40))
            .unwrap();
        assert_eq!(account.balance, 60);
    }

    #[test]
    fn test_balance_equals_sum_of_postings() {
        let mut account = account();
        account.post(&Transaction::deposit(1000)).unwrap();
        account.post(&Transaction::withdrawal(250)).unwrap();
        account.post(&Transaction::deposit(500)).unwrap();
        account
            .post(&Transaction::bill_payment("Water Co".to_string(), 150))
            .unwrap();
        assert_eq!(account.balance, 1000 - 250 + 500 - 150);
    }
}
