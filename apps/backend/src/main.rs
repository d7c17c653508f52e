use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use worldle_backend::config::server::ServerConfig;
use worldle_backend::directory::FirebaseDirectory;
use worldle_backend::infra::state::build_state;
use worldle_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use worldle_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };

    let client = match reqwest::Client::builder().build() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_directory(Arc::new(FirebaseDirectory::from_env(client)))
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);

    info!(host = %server.host, port = server.port, "Starting Worldle backend");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
