//! Test service builder: given an AppState, build an initialized Actix
//! test service wired like production.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{web, App};

use crate::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use crate::state::app_state::AppState;

/// Production routes and middleware, minus CORS.
///
/// Return type is `impl Service<...>` so callers don't have to name the opaque service type.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    let app = App::new()
        .wrap(StructuredLogger)
        .wrap(TraceSpan)
        .wrap(RequestTrace)
        .app_data(web::Data::new(state))
        .configure(crate::routes::configure)
        .default_service(web::to(crate::routes::not_found));

    actix_web::test::init_service(app).await
}
