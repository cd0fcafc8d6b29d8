use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error, web};

use crate::dto::games::MutationResponse;
use crate::services::ServiceError;

pub mod categories;
pub mod games;
pub mod stats;

/// Register every API route under `/api`.
///
/// Fixed segments (`featured`, `recent`, `popular`, `add`) are registered before the
/// `{id}` matchers so they are not captured as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(games::add_game)
            .service(games::scrape_game)
            .service(games::import_games)
            .service(games::show_featured_games)
            .service(games::show_recent_games)
            .service(games::show_popular_games)
            .service(games::show_games)
            .service(games::show_game)
            .service(categories::show_categories)
            .service(categories::show_category_games)
            .service(categories::show_category)
            .service(stats::show_stats),
    );
}

/// JSON extractor settings that report unparseable bodies as structured
/// `400` responses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {err}");
        let response = HttpResponse::BadRequest()
            .json(MutationResponse::failure(format!("invalid request body: {err}")));
        error::InternalError::from_response(err, response).into()
    })
}

/// Query string extractor settings matching [`json_config`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(MutationResponse::failure(format!("invalid query string: {err}")));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn status_for(err: &ServiceError) -> StatusCode {
    if err.is_client_error() {
        return StatusCode::BAD_REQUEST;
    }
    match err {
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `{success: false, message}` response with the status matching `err`.
pub fn failure(err: &ServiceError) -> HttpResponse {
    HttpResponse::build(status_for(err)).json(MutationResponse::from(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        assert_eq!(
            status_for(&ServiceError::invalid("title required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ServiceError::UnknownCategory),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&ServiceError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&ServiceError::NotImplemented),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            status_for(&ServiceError::Persistence),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
