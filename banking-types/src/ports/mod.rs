//! Port traits implemented by outbound adapters.

pub mod repository;

pub use repository::LedgerRepository;
