//! game-catalog server entry point.
//!
//! Startup order: environment and logging, configuration, database pool and
//! migrations, optional seed, then the HTTP server.

use std::io;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

use game_catalog::db::{establish_connection_pool, run_migrations};
use game_catalog::models::config::ServerConfig;
use game_catalog::repository::DieselRepository;
use game_catalog::routes;
use game_catalog::services::seed::seed_catalog_from_file;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to open database {}: {e}", server_config.database_url);
        io::Error::other(e)
    })?;
    run_migrations(&pool).map_err(|e| {
        log::error!("Failed to run migrations: {e}");
        io::Error::other(e)
    })?;
    log::info!("Database ready at {}", server_config.database_url);

    let repo = DieselRepository::new(pool);

    if let Some(seed_path) = &server_config.seed_path {
        match seed_catalog_from_file(seed_path, &repo) {
            Ok(0) => {}
            Ok(inserted) => log::info!("Seeded {inserted} records from {}", seed_path.display()),
            Err(e) => log::warn!("Skipping seed from {}: {e}", seed_path.display()),
        }
    }

    let bind_address = (server_config.address.clone(), server_config.port);
    let games_dir = server_config.public_dir.join("games");
    let repo = web::Data::new(repo);
    let server_config = web::Data::new(server_config);

    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .app_data(repo.clone())
            .app_data(server_config.clone())
            .configure(routes::configure)
            .service(Files::new("/games", games_dir.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
