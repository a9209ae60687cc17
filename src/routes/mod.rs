// Route exports
pub mod errors;
pub mod matching;

use actix_web::web;

pub use errors::{handle_query_payload_error, QueryError};
pub use matching::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(matching::health_check))
        .service(web::scope("/api").configure(matching::configure));
}

/// Routes plus the JSON query error handler
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handle_query_payload_error));
    configure_routes(cfg);
}
