// tests/support/mod.rs
// Shared support code for the integration test binaries. Some helpers are
// unused in individual test crates; allow those warnings to keep output clean.
#![allow(dead_code)]

use board_core::application::{ports::time::Clock, services::ApplicationServices};
use board_core::domain::article::ArticleRepository;
use board_core::infrastructure::{
    database, repositories::SqliteArticleRepository, time::SystemClock,
};
use board_core::presentation::http::{routes::build_router, state::HttpState};
use once_cell::sync::OnceCell;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::sync::Arc;

pub fn init_tracing() {
    static INIT: OnceCell<()> = OnceCell::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// One-connection in-memory pool: every connection of a SQLite pool gets its
/// own `:memory:` database, so the pool must never open a second one.
pub async fn make_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");

    database::run_migrations(&pool).await.expect("migrations");
    pool
}

pub async fn make_services() -> Arc<ApplicationServices> {
    init_tracing();

    let pool = Arc::new(make_pool().await);
    let repo: Arc<dyn ArticleRepository> = Arc::new(SqliteArticleRepository::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    Arc::new(ApplicationServices::new(repo, clock))
}

pub async fn make_test_app() -> (axum::Router, Arc<ApplicationServices>) {
    let services = make_services().await;
    let state = HttpState {
        services: Arc::clone(&services),
    };

    (build_router(state), services)
}

/// Mirrors the original fixture: three articles `title1..3` / `body1..3`,
/// none blinded.
pub async fn seed_articles(services: &ApplicationServices) -> Vec<i64> {
    let mut ids = Vec::new();
    for no in 1..=3 {
        let id = services
            .articles
            .write(format!("title{no}"), format!("body{no}"), false)
            .await
            .expect("seed write");
        ids.push(id);
    }
    ids
}
