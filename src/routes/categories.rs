use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::failure;
use crate::services::categories::{
    show_categories as show_categories_service, show_category as show_category_service,
    show_category_games as show_category_games_service,
};

#[get("/categories")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => failure(&err),
    }
}

#[get("/categories/{category_id}")]
pub async fn show_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_category_service(&category_id, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => failure(&err),
    }
}

#[get("/categories/{category_id}/games")]
pub async fn show_category_games(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_category_games_service(&category_id, repo.get_ref()) {
        Ok(games) => HttpResponse::Ok().json(games),
        Err(err) => failure(&err),
    }
}
