use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use invest_goals_core::goals::{GoalService, GoalServiceTrait};
use invest_goals_storage_sqlite::{db, GoalRepository};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub started_at: Instant,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let goal_repository = Arc::new(GoalRepository::new(pool));
    let goal_service = Arc::new(GoalService::new(goal_repository));

    Ok(Arc::new(AppState {
        goal_service,
        started_at: Instant::now(),
    }))
}
