//! Configuration loading from environment.

use std::env;

/// HTTP port used when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Banking server configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` must point at the SQLite database backing the
    /// ledger, e.g. `sqlite://banking.db?mode=rwc`.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;
        ensure_sqlite_url(&database_url)?;

        Ok(Self { port, database_url })
    }
}

/// The only adapter wired into this binary is SQLite; fail fast on any
/// other scheme instead of handing sqlx an unusable URL.
fn ensure_sqlite_url(url: &str) -> anyhow::Result<()> {
    if url.starts_with("sqlite:") {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "DATABASE_URL must be a sqlite:// URL, got: {url}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_urls_accepted() {
        ensure_sqlite_url("sqlite://banking.db?mode=rwc").unwrap();
        ensure_sqlite_url("sqlite::memory:").unwrap();
    }

    #[test]
    fn test_non_sqlite_url_rejected() {
        assert!(ensure_sqlite_url("postgres://localhost/banking").is_err());
    }
}
