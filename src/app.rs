/*
 * Responsibility
 * - tracing / panic hook 初期化
 * - Config読み込み → Router 組み立て
 * - Middleware の適用 (/api には CORS、全体には http 系)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{self, handlers::health::health};
use crate::config::Config;
use crate::error;
use crate::middleware;

fn init_tracing() {
    // RUST_LOG wins when set.
    // Ex:
    // RUST_LOG=info,greeting_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so it gets noticed.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        allowed_origin = ?config.cors_allowed_origin,
        "starting greeting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(config: &Config) -> Router {
    let api = middleware::cors::apply(api::routes(), config);

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(error::route_not_found);

    middleware::http::apply(router, config)
}
