use tower_sessions::{service::SignedCookie, MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure in-memory session management with signed cookies
///
/// The signing key is derived from the configured session secret, so cookies
/// issued before a secret change stop validating and those sessions end.
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    use time::Duration;
    use tower_sessions::{cookie::Key, cookie::SameSite, Expiry};

    let session_store = MemoryStore::default();
    let key = Key::derive_from(config.session_secret.as_bytes());

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key)
}

/// Open the system's default browser at the given URL
///
/// Best effort only. The server keeps running whether or not a browser could
/// be launched, so a failure is just logged.
pub fn open_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd")
        .args(["/C", "start", url])
        .spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = std::process::Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = result {
        tracing::debug!("Failed to open browser at {}: {}", url, e);
    }
}
