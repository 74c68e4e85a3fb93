//! CORS policy for browser clients.

use actix_cors::Cors;

use crate::config::CorsConfig;

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Build the CORS middleware: any method and header from the configured origins.
///
/// Listed origins may send credentials; the `*` wildcard may not.
pub fn cors(config: &CorsConfig) -> Cors {
    if config.allows_any_origin() {
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(PREFLIGHT_MAX_AGE_SECS);
    }

    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}
