//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use banking_types::LedgerRepository;

use super::handlers::{self, AppState};
use crate::{AccountService, TransactionService};

/// HTTP Server for the banking ledger API.
pub struct HttpServer<R: LedgerRepository> {
    state: Arc<AppState<R>>,
}

impl<R: LedgerRepository> HttpServer<R> {
    /// Creates a new HTTP server with the given services.
    pub fn new(accounts: AccountService<R>, transactions: TransactionService<R>) -> Self {
        Self {
            state: Arc::new(AppState {
                accounts,
                transactions,
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/v1", post(handlers::create_account::<R>))
            .route("/api/v1/{account_number}", get(handlers::get_account::<R>))
            .route("/api/v1/credit/{account_number}", post(handlers::credit::<R>))
            .route("/api/v1/debit/{account_number}", post(handlers::debit::<R>))
            .route(
                "/api/v1/bill/{account_number}",
                post(handlers::bill_payment::<R>),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
