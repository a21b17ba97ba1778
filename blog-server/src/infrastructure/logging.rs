use anyhow::{Result, anyhow};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// RUST_LOG из окружения важнее уровня из настроек; некорректный уровень
/// заменяется на `info`. Шум sqlx по каждому запросу приглушается.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{default_level},sqlx=warn")))
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"))
}

pub fn init_logging(default_level: &str) -> Result<()> {
    fmt()
        .with_env_filter(build_filter(default_level))
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    debug!(default_level, "logging initialized");
    Ok(())
}
