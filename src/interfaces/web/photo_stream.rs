use super::models::{PhotoGroups, WireMessage};
use super::server::PhotoCastState;
use crate::domain::PhotoEvent;
use axum::extract::ws::{Message, WebSocket};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// Stream photo change notifications to one WebSocket connection
///
/// On connect: if nothing is loaded yet, run one reconciliation, then send
/// the full snapshot as a single `all-photos` message. Afterwards forward
/// broadcast events until the client goes away. Delivery is best-effort;
/// a client that lags too far simply misses events.
pub async fn stream_photos(mut socket: WebSocket, state: PhotoCastState) {
    info!("Photo stream client connected");

    if let Err(e) = state.photos.ensure_loaded().await {
        // Bootstrap fetch failed; the client still gets the (empty) snapshot
        warn!("Initial reconciliation failed: {}", e);
    }

    // Subscribe before reading the snapshot so no event between the two is lost
    let mut events = state.photos.subscribe();

    let bootstrap = WireMessage::AllPhotos(PhotoGroups::regular(state.photos.photo_urls().await));
    if send_message(&mut socket, &bootstrap).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        let message = wire_message(event);
                        if send_message(&mut socket, &message).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Photo stream client lagged; events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            msg = socket.recv() => {
                match msg {
                    // No client->server application messages are defined
                    Some(Ok(Message::Close(_))) | None => {
                        info!("Photo stream client disconnected");
                        break;
                    }
                    Some(Ok(other)) => {
                        debug!("Ignoring client message: {:?}", other);
                    }
                    Some(Err(_)) => break,
                }
            }
        }
    }
}

fn wire_message(event: PhotoEvent) -> WireMessage {
    match event {
        PhotoEvent::Added(descriptor) => WireMessage::NewPhoto(descriptor.url),
        PhotoEvent::Removed(id) => WireMessage::PhotoRemoved(id.to_string()),
    }
}

async fn send_message(socket: &mut WebSocket, message: &WireMessage) -> Result<(), axum::Error> {
    let text = serde_json::to_string(message).unwrap_or_default();
    socket.send(Message::Text(text.into())).await
}
