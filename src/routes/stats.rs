use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::failure;
use crate::services::stats::show_catalog_stats;

#[get("/stats")]
pub async fn show_stats(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_catalog_stats(repo.get_ref()) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => failure(&err),
    }
}
