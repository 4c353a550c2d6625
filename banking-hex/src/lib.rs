//! # Banking Hex
//!
//! Application service layer and HTTP adapter for the banking ledger.
//!
//! ## Architecture
//!
//! - `service/` - Application services (account lookup/creation, transaction posting)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The services are generic over `R: LedgerRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod service;


pub use service::{AccountService, TransactionService};
