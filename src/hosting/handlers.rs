use crate::arcade::*;
use crate::dto::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn start(arcade: web::Data<Arcade>, req: Option<web::Json<StartGame>>) -> impl Responder {
    let id = req.and_then(|r| r.into_inner().player_id);
    HttpResponse::Ok().json(arcade.start(id).await)
}

pub async fn play(arcade: web::Data<Arcade>, req: web::Json<MakeMove>) -> impl Responder {
    let MakeMove {
        player_id,
        direction,
    } = req.into_inner();
    match (player_id, direction) {
        (None, _) => HttpResponse::BadRequest().json(ApiError::new("Missing field: player_id")),
        (_, None) => HttpResponse::BadRequest().json(ApiError::new("Missing field: direction")),
        (Some(id), Some(direction)) => match arcade.play(&id, &direction).await {
            Ok(made) => HttpResponse::Ok().json(made),
            Err(e) => failure(e),
        },
    }
}

pub async fn stats(arcade: web::Data<Arcade>, query: web::Query<StatsQuery>) -> impl Responder {
    match arcade.stats(query.player_id.as_deref().filter(|id| !id.is_empty())).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => failure(e),
    }
}

fn failure(e: ArcadeError) -> HttpResponse {
    match e {
        ArcadeError::SessionNotFound(_) => HttpResponse::NotFound().json(ApiError::new("Game not found")),
        ArcadeError::InvalidMove(e) => HttpResponse::BadRequest().json(ApiError::because("Invalid move", e)),
    }
}
