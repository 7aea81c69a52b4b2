//! Mini e-commerce shipping service

use anyhow::Result;
use mini_ecommerce_shipping::{api, config::AppConfig, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();
    let config = AppConfig::from_env()?;

    let pool = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::connect(&config, url).await?;
            let seeded = db::seed_default_methods(&pool).await?;
            tracing::info!(seeded, "shipping method catalog ready");
            Some(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, serving the built-in shipping catalog read-only");
            None
        }
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let app = api::router(api::AppState::new(pool, config));
    tracing::info!("Shipping service listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
