use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod game;
pub mod health;

/// Configure application routes.
///
/// Shared by `main.rs` and the test app builder; middleware is wired by the
/// caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Game routes: /api/**
    cfg.service(web::scope("/api").configure(game::configure_routes));
}

/// Default service: unmatched paths get the problem+json 404 instead of an
/// empty body.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("no route for {} {}", req.method(), req.path()),
    ))
}
