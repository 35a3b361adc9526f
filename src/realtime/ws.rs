use actix_web::{rt, web, Error, HttpRequest, HttpResponse};
use actix_ws::Message;
use futures_util::StreamExt as _;

use super::events::ServerEvent;
use super::hub::BroadcastHub;

/// GET /ws — upgrade to a WebSocket, register the viewer with the hub, and
/// pump events until either side goes away.
///
/// Client frames carry no application data: any text frame is treated as a
/// liveness probe and answered with `{"type":"ping"}` on this connection
/// only; protocol pings get pongs. Nothing a client sends is ever
/// broadcast.
pub async fn serve_updates(
    req: HttpRequest,
    body: web::Payload,
    hub: web::Data<BroadcastHub>,
) -> Result<HttpResponse, Error> {
    let (response, mut session, mut frames) = actix_ws::handle(&req, body)?;
    let (connection_id, mut events) = hub.subscribe();
    let hub = hub.into_inner();

    rt::spawn(async move {
        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    let Ok(frame) = serde_json::to_string(&event) else {
                        log::error!("failed to encode event for viewer {connection_id}");
                        continue;
                    };
                    if session.text(frame).await.is_err() {
                        break;
                    }
                }
                frame = frames.next() => {
                    match frame {
                        Some(Ok(Message::Text(_))) => {
                            let Ok(ping) = serde_json::to_string(&ServerEvent::Ping) else {
                                continue;
                            };
                            if session.text(ping).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Ping(payload))) => {
                            if session.pong(&payload).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                        Some(Ok(_)) => {}
                    }
                }
            }
        }

        hub.unsubscribe(connection_id);
        let _ = session.close(None).await;
    });

    Ok(response)
}
