use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build the cross-origin layer, or `None` when CORS is switched off.
///
/// Without an explicit origin list the layer is fully permissive: any origin,
/// method and header, never credentials.
pub fn build_cors_layer(cfg: &CorsConfig) -> Option<CorsLayer> {
    if !cfg.enabled {
        return None;
    }

    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false);

    if cfg.allowed_origins.is_empty() || cfg.allowed_origins.iter().any(|o| o == "*") {
        return Some(layer.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "skipping invalid CORS origin");
                None
            }
        })
        .collect();

    Some(layer.allow_origin(origins))
}
