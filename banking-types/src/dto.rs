//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::PostedTransaction;

// ─────────────────────────────────────────────────────────────────────────────
// Account DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Name of the account holder
    pub owner: String,
    /// Requested account number (must be unused)
    pub account_number: String,
}

/// Summary returned after creating an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub owner: String,
    pub account_number: String,
}

/// Full account body for lookups, including the posting history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_number: String,
    pub owner: String,
    /// Current balance in minor currency units
    pub balance: i64,
    pub created_at: DateTime<Utc>,
    /// Posted transactions in posting order
    pub transactions: Vec<PostedTransaction>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for credit and debit operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountRequest {
    /// Amount in minor currency units
    pub amount: i64,
}

/// Request body for bill payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillPaymentRequest {
    /// Amount in minor currency units
    pub amount: i64,
    /// Who the bill is paid to
    pub payee: String,
}

/// Result of a successful posting, returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatus {
    pub status: String,
    /// Proof of completion generated at posting time
    pub approval_code: String,
}

impl TransactionStatus {
    /// An OK status carrying the given approval code.
    pub fn ok(approval_code: String) -> Self {
        Self {
            status: "OK".to_string(),
            approval_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ok_shape() {
        let status = TransactionStatus::ok("abc-123".to_string());
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["approvalCode"], "abc-123");
    }

    #[test]
    fn test_create_account_request_camel_case() {
        let req: CreateAccountRequest =
            serde_json::from_str(r#"{"owner":"Ada","accountNumber":"A1"}"#).unwrap();
        assert_eq!(req.owner, "Ada");
        assert_eq!(req.account_number, "A1");
    }
}
