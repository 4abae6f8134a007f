use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    PgPool,
};

use crate::config::AppConfig;

/// Builds the connection pool shared by every handler. In production the
/// connection requires TLS without verifying the server certificate.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let mut options =
        PgConnectOptions::from_str(&config.database_url).context("parse DATABASE_URL")?;
    if config.is_production() {
        options = options.ssl_mode(PgSslMode::Require);
    }
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .context("connect to database")?;
    tracing::info!(production = config.is_production(), "database pool ready");
    Ok(pool)
}

/// Applies the embedded migrations. A failure is not fatal: the schema may be
/// owned by another deployment step.
pub async fn migrate(db: &PgPool) {
    if let Err(e) = sqlx::migrate!("./migrations").run(db).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }
}
