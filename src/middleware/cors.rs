//! CORS policy for the browser front-end.
//!
//! Note:
//! - CORS is enforced by browsers. curl and server-to-server calls are not
//!   restricted by it.
//! - Applied to the `/api` router only; `/health` carries no CORS headers.
//!
//! Policy:
//! - Exactly one allowed origin, taken from `Config` (exact match).
//! - Requests from any other origin get no `access-control-allow-origin`.
//! - No credentials.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

/// How long browsers may cache a preflight answer.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(30 * 60);

pub fn layer(config: &Config) -> CorsLayer {
    let allowed = config.cors_allowed_origin.clone();

    // Echo the origin back only when it is the configured one.
    let allow_origin =
        AllowOrigin::predicate(move |origin: &HeaderValue, _req| *origin == allowed);

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(Any)
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Apply the CORS policy to the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}
