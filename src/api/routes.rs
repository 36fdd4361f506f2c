/*
 * Responsibility
 * - /api の URL 構造を定義
 * - CORS はこの Router にだけ掛ける (app.rs で nest される)
 */
use axum::{Router, routing::get};

use crate::api::handlers::hello::hello;

pub fn routes() -> Router {
    Router::new().route("/hello", get(hello))
}
