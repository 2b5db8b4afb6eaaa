use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;

/// Shared application state handed to every request handler.
///
/// Carries the database pool and environment-derived configuration. Cloning
/// is cheap; services receive the pool as an explicit argument rather than
/// reaching into any global.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        cors_config: CorsConfig::from_env(),
    }
}
