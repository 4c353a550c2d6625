//! Transaction domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a posted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The kind of a transaction.
///
/// Bill payments debit the balance exactly like withdrawals but
/// additionally record the payee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Money coming into the account
    Deposit,
    /// Money leaving the account
    Withdrawal,
    /// Money leaving the account towards a named payee
    BillPayment { payee: String },
}

impl TransactionKind {
    /// Returns the storage/wire discriminator name.
    pub fn name(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::BillPayment { .. } => "BILL_PAYMENT",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A draft transaction: what a caller can construct before posting.
///
/// Only the amount and kind exist at this point. Date, approval code and
/// the account link are stamped during posting, producing a
/// [`PostedTransaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Amount in minor currency units
    pub amount: i64,
    /// Kind of movement
    pub kind: TransactionKind,
}

impl Transaction {
    /// Creates a deposit draft.
    pub fn deposit(amount: i64) -> Self {
        Self {
            amount,
            kind: TransactionKind::Deposit,
        }
    }

    /// Creates a withdrawal draft.
    pub fn withdrawal(amount: i64) -> Self {
        Self {
            amount,
            kind: TransactionKind::Withdrawal,
        }
    }

    /// Creates a bill-payment draft towards the given payee.
    pub fn bill_payment(payee: String, amount: i64) -> Self {
        Self {
            amount,
            kind: TransactionKind::BillPayment { payee },
        }
    }

    /// Finalizes this draft into an immutable posted record.
    pub fn into_posted(
        self,
        account_number: String,
        approval_code: String,
        date: DateTime<Utc>,
    ) -> PostedTransaction {
        PostedTransaction {
            id: TransactionId::new(),
            account_number,
            amount: self.amount,
            kind: self.kind,
            approval_code,
            date,
        }
    }
}

/// A recorded financial transaction.
///
/// Posted transactions are immutable - they represent a historical record
/// of what happened and are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedTransaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Account this transaction was posted against
    pub account_number: String,
    /// Amount in minor currency units
    pub amount: i64,
    /// Kind of movement (and payee, for bill payments)
    #[serde(flatten)]
    pub kind: TransactionKind,
    /// Unique token generated at posting time, returned as proof of completion
    pub approval_code: String,
    /// When the transaction was posted
    pub date: DateTime<Utc>,
}

impl PostedTransaction {
    /// Reconstructs a posted transaction from database fields.
    pub fn from_parts(
        id: TransactionId,
        account_number: String,
        amount: i64,
        kind: TransactionKind,
        approval_code: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_number,
            amount,
            kind,
            approval_code,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_draft() {
        let tx = Transaction::deposit(1000);
        assert_eq!(tx.amount, 1000);
        assert_eq!(tx.kind, TransactionKind::Deposit);
    }

    #[test]
    fn test_bill_payment_carries_payee() {
        let tx = Transaction::bill_payment("Electric Co".to_string(), 40);
        assert_eq!(
            tx.kind,
            TransactionKind::BillPayment {
                payee: "Electric Co".to_string()
            }
        );
        assert_eq!(tx.kind.name(), "BILL_PAYMENT");
    }

    #[test]
    fn test_into_posted_stamps_metadata() {
        let before = Utc::now();
        let posted = Transaction::withdrawal(200).into_posted(
            "A1".to_string(),
            Uuid::new_v4().to_string(),
            Utc::now(),
        );

        assert_eq!(posted.account_number, "A1");
        assert_eq!(posted.amount, 200);
        assert!(!posted.approval_code.is_empty());
        assert!(posted.date >= before);
    }

    #[test]
    fn test_posted_serializes_with_flattened_kind() {
        let posted = Transaction::bill_payment("Electric Co".to_string(), 40).into_posted(
            "A1".to_string(),
            "code-1".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(&posted).unwrap();
        assert_eq!(json["type"], "BILL_PAYMENT");
        assert_eq!(json["payee"], "Electric Co");
        assert_eq!(json["approvalCode"], "code-1");
    }
}
