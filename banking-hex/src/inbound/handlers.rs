//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use banking_types::{
    AccountResponse, AmountRequest, AppError, BillPaymentRequest, CreateAccountRequest,
    LedgerRepository, Transaction,
};

use crate::{AccountService, TransactionService};

/// Application state shared across handlers.
pub struct AppState<R: LedgerRepository> {
    pub accounts: AccountService<R>,
    pub transactions: TransactionService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InsufficientBalance {
                available,
                requested,
            } => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Insufficient balance: available {}, requested {}",
                    available, requested
                ),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a new account.
#[tracing::instrument(skip(state), fields(account_number = %req.account_number))]
pub async fn create_account<R: LedgerRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.accounts.create_account(req).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Get an account with its posting history.
#[tracing::instrument(skip(state))]
pub async fn get_account<R: LedgerRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(account_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .accounts
        .find_account(&account_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account not found: {}", account_number)))?;

    let transactions = state.transactions.list_transactions(&account_number).await?;

    Ok(Json(AccountResponse {
        account_number: account.account_number,
        owner: account.owner,
        balance: account.balance,
        created_at: account.created_at,
        transactions,
    }))
}

/// Deposit money into an account.
#[tracing::instrument(skip(state), fields(amount = req.amount))]
pub async fn credit<R: LedgerRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(account_number): Path<String>,
    Json(req): Json<AmountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state
        .transactions
        .save_transaction(&account_number, Transaction::deposit(req.amount))
        .await?;
    Ok(Json(status))
}

/// Withdraw money from an account.
#[tracing::instrument(skip(state), fields(amount = req.amount))]
pub async fn debit<R: LedgerRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(account_number): Path<String>,
    Json(req): Json<AmountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state
        .transactions
        .save_transaction(&account_number, Transaction::withdrawal(req.amount))
        .await?;
    Ok(Json(status))
}

/// Pay a bill from an account.
#[tracing::instrument(skip(state), fields(amount = req.amount, payee = %req.payee))]
pub async fn bill_payment<R: LedgerRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(account_number): Path<String>,
    Json(req): Json<BillPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state
        .transactions
        .save_transaction(
            &account_number,
            Transaction::bill_payment(req.payee, req.amount),
        )
        .await?;
    Ok(Json(status))
}
