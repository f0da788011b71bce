use super::*;
use crate::arcade::Arcade;
use crate::config::Config;
use crate::predict::Predictor;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let arcade = web::Data::new(Arcade::new(Predictor::from(config.variant), config.seed));
        log::info!(
            "starting game server on {} ({} workers, {} predictor)",
            config.bind,
            config.workers,
            config.variant
        );
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(arcade.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await?;
        Ok(())
    }
}

/// Route table, shared by the server and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/ws", web::get().to(connect))
        .service(
            web::scope("/api/game")
                .route("/start", web::post().to(start))
                .route("/move", web::post().to(play))
                .route("/stats", web::get().to(stats)),
        );
}
