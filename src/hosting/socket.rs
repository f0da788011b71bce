use crate::arcade::Arcade;
use crate::dto::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;

/// Upgrades to a WebSocket and answers prediction requests on it.
pub async fn connect(arcade: web::Data<Arcade>, body: web::Payload, req: HttpRequest) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            actix_web::rt::spawn(relay(arcade.into_inner(), session, stream));
            response
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Pumps client frames until the socket closes. Each text frame gets
/// exactly one reply.
async fn relay(arcade: Arc<Arcade>, mut session: actix_ws::Session, mut stream: actix_ws::MessageStream) {
    use futures::StreamExt;
    log::info!("client connected");
    if session.text(ServerMessage::Connected.to_json()).await.is_err() {
        return;
    }
    'sesh: loop {
        match stream.next().await {
            Some(Ok(actix_ws::Message::Text(text))) => {
                let reply = respond(&arcade, &text).await;
                if session.text(reply.to_json()).await.is_err() {
                    break 'sesh;
                }
            }
            Some(Ok(actix_ws::Message::Ping(bytes))) => {
                if session.pong(&bytes).await.is_err() {
                    break 'sesh;
                }
            }
            Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
            Some(Err(_)) => break 'sesh,
            None => break 'sesh,
            _ => continue 'sesh,
        }
    }
    let _ = session.close(None).await;
    log::info!("client disconnected");
}

/// Reply for a single client frame.
pub async fn respond(arcade: &Arcade, text: &str) -> ServerMessage {
    match ClientMessage::try_from(text) {
        Err(e) => ServerMessage::error(format!("unreadable message: {}", e)),
        Ok(ClientMessage::RequestPrediction { player_id }) => match arcade.forecast(&player_id).await {
            Ok(forecast) => ServerMessage::prediction(forecast, chrono::Utc::now().to_rfc3339()),
            Err(e) => ServerMessage::error(e),
        },
    }
}
