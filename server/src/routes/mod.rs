//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns no API of its own: complaint and session endpoints live on
//! the backend named in `ClientConfig`. This router serves the Leptos SSR app,
//! its compiled `/pkg` assets and a liveness probe, and hands the backend
//! settings to every render through context.


use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Full SSR frontend: Leptos routes, static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section) or the CORS origin is
/// not a valid header value.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let client_config = config.client.clone();
                move || provide_context(client_config.clone())
            },
            {
                let opts = leptos_options.clone();
                let client_config = config.client.clone();
                move || client::app::shell(opts.clone(), client_config.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let router = Router::new()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")));

    with_common_layers(router, config)
}

/// Probe route plus the layers every response passes through.
pub(crate) fn with_common_layers(router: Router, config: &ServerConfig) -> Result<Router, ServerError> {
    let mut router = router.route("/healthz", get(healthz)).layer(cors_layer(config)?).layer(TraceLayer::new_for_http());
    if config.compression {
        router = router.layer(CompressionLayer::new());
    }
    Ok(router)
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    let origin = match config.cors_origin.as_deref() {
        Some(raw) => AllowOrigin::exact(
            HeaderValue::from_str(raw)
                .map_err(|_| ServerError::InvalidEnv { var: "CLEAN_INDIA_CORS_ORIGIN", value: raw.to_owned() })?,
        ),
        None => AllowOrigin::from(Any),
    };
    Ok(CorsLayer::new().allow_origin(origin).allow_methods(Any).allow_headers(Any))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
