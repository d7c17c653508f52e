use std::env;

use actix_cors::Cors;
use actix_web::http::header;

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Build CORS middleware from `ALLOWED_ORIGIN`.
///
/// Accepts a comma-separated list (e.g.
/// `ALLOWED_ORIGIN=https://worldle.example,http://localhost:3000`).
/// Entries that are empty, `null`, or not http(s) are ignored; if nothing
/// valid remains, the React dev server origin is used.
pub fn cors_middleware() -> Cors {
    let raw = env::var("ALLOWED_ORIGIN").unwrap_or_default();
    build_cors(&allowed_origins(&raw))
}

fn allowed_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_ORIGIN.to_string()]
    } else {
        origins
    }
}

fn build_cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
