use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, put, web};
use validator::Validate;

use crate::dto::games::{ImportResponse, MutationResponse};
use crate::forms::games::{
    AddGameForm, GameCandidate, GameListParams, ImportGamesForm, ImportGamesPayload, LimitParams,
    ScrapeGameForm, ScrapeGamePayload,
};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{failure, status_for};
use crate::services::ServiceError;
use crate::services::games::{
    add_game as add_game_service, scrape_and_add_game as scrape_and_add_game_service,
    show_featured_games as show_featured_games_service, show_game as show_game_service,
    show_games as show_games_service, show_popular_games as show_popular_games_service,
    show_recent_games as show_recent_games_service,
};
use crate::services::import::import_games_from_directory;

#[post("/games/add")]
pub async fn add_game(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddGameForm>,
) -> impl Responder {
    let result = add_game_service(GameCandidate::from(form), repo.get_ref());
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => status_for(err),
    };

    HttpResponse::build(status).json(MutationResponse::from(&result))
}

#[put("/games/add")]
pub async fn scrape_game(web::Json(form): web::Json<ScrapeGameForm>) -> impl Responder {
    let payload: ScrapeGamePayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return failure(&ServiceError::from(e)),
    };

    let result = scrape_and_add_game_service(payload);
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => status_for(err),
    };

    HttpResponse::build(status).json(MutationResponse::from(&result))
}

#[post("/games/import")]
pub async fn import_games(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<ImportGamesForm>,
) -> impl Responder {
    let payload: ImportGamesPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return failure(&ServiceError::from(e)),
    };

    match import_games_from_directory(payload, &server_config.public_dir, repo.get_ref()) {
        Ok(report) => {
            let status = if report.success() {
                StatusCode::OK
            } else {
                StatusCode::BAD_REQUEST
            };
            HttpResponse::build(status).json(ImportResponse::from(report))
        }
        Err(err) => HttpResponse::build(status_for(&err)).json(ImportResponse {
            success: false,
            message: err.to_string(),
            imported: 0,
        }),
    }
}

#[get("/games")]
pub async fn show_games(
    repo: web::Data<DieselRepository>,
    params: web::Query<GameListParams>,
) -> impl Responder {
    match show_games_service(params.into_inner(), repo.get_ref()) {
        Ok(games) => HttpResponse::Ok().json(games),
        Err(err) => failure(&err),
    }
}

#[get("/games/featured")]
pub async fn show_featured_games(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_featured_games_service(repo.get_ref()) {
        Ok(games) => HttpResponse::Ok().json(games),
        Err(err) => failure(&err),
    }
}

#[get("/games/recent")]
pub async fn show_recent_games(
    repo: web::Data<DieselRepository>,
    params: web::Query<LimitParams>,
) -> impl Responder {
    if let Err(e) = params.validate() {
        return failure(&ServiceError::invalid(e.to_string()));
    }

    match show_recent_games_service(params.limit, repo.get_ref()) {
        Ok(games) => HttpResponse::Ok().json(games),
        Err(err) => failure(&err),
    }
}

#[get("/games/popular")]
pub async fn show_popular_games(
    repo: web::Data<DieselRepository>,
    params: web::Query<LimitParams>,
) -> impl Responder {
    if let Err(e) = params.validate() {
        return failure(&ServiceError::invalid(e.to_string()));
    }

    match show_popular_games_service(params.limit, repo.get_ref()) {
        Ok(games) => HttpResponse::Ok().json(games),
        Err(err) => failure(&err),
    }
}

#[get("/games/{game_id}")]
pub async fn show_game(
    game_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_game_service(&game_id, repo.get_ref()) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(err) => failure(&err),
    }
}
