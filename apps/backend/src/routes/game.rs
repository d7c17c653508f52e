//! Game HTTP routes.
//!
//! Thin adapters over [`GameStateCoordinator`](crate::services::GameStateCoordinator)
//! and [`TerritoryCache`](crate::services::TerritoryCache); status mapping
//! lives in `AppError`.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct NewGameQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct NewGameResponse {
    #[serde(rename = "sessionId")]
    session_id: String,
}

#[derive(Debug, Serialize)]
struct AnswerResponse {
    answer: String,
}

/// GET /api/newgame[?sessionId=...]
///
/// Starts or resumes the game for the given session. Without a session id a
/// fresh one is minted and returned for the client to persist.
async fn new_game(
    query: web::Query<NewGameQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<NewGameResponse>, AppError> {
    let session_id = query
        .into_inner()
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    app_state.game.start_game(&session_id).await?;

    Ok(web::Json(NewGameResponse { session_id }))
}

/// GET /api/silhouette
async fn silhouette(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let image = app_state.game.get_silhouette().await?;

    Ok(HttpResponse::Ok()
        .content_type("image/png")
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .body(image))
}

/// GET /api/territories
///
/// Every selectable territory in display form.
async fn territories(app_state: web::Data<AppState>) -> Result<web::Json<Vec<String>>, AppError> {
    Ok(web::Json(app_state.territories.formatted().await?))
}

/// GET /api/answer
async fn answer(app_state: web::Data<AppState>) -> Result<web::Json<AnswerResponse>, AppError> {
    let answer = app_state.game.current_answer().await?;
    Ok(web::Json(AnswerResponse { answer }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }));
    cfg.route("/newgame", web::get().to(new_game))
        .route("/silhouette", web::get().to(silhouette))
        .route("/territories", web::get().to(territories))
        .route("/answer", web::get().to(answer));
}
