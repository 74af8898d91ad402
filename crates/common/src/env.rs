//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database pool is opened.

use std::path::Path;

use tracing::{info, warn};

/// Filesystem path behind a file-backed SQLite URL, if any.
///
/// `sqlite::memory:` and non-SQLite URLs yield `None`.
pub fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(path)
}

/// Ensure the directory holding a file-backed SQLite database exists.
/// Postgres URLs are left alone; a missing `DATABASE_URL` is only warned about.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    if std::env::var("DATABASE_URL").is_err() {
        warn!("DATABASE_URL not set; relying on config.toml or the built-in default");
    }
    let Some(path) = sqlite_file_path(database_url) else { return Ok(()) };
    if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
        info!(dir = %dir.display(), "sqlite data directory ready");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::sqlite_file_path;

    #[test]
    fn memory_and_postgres_urls_have_no_file() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://u:p@localhost/db"), None);
    }

    #[test]
    fn file_urls_strip_scheme_and_query() {
        assert_eq!(sqlite_file_path("sqlite://data/ledger.db?mode=rwc"), Some("data/ledger.db"));
        assert_eq!(sqlite_file_path("sqlite:ledger.db"), Some("ledger.db"));
    }
}
