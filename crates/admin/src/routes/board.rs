//! The live order board: push-channel ingest and the SSE fan-out.
//!
//! The platform's push transport POSTs order events to the webhook; the
//! board dialogs hold an SSE stream open and refresh their order table
//! whenever an event arrives. A board that lags behind the broadcast
//! buffer gets a `lagged` event telling it to refetch instead of
//! replaying what it missed.

use std::convert::Infallible;

use async_stream::stream;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use secrecy::ExposeSecret;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, instrument, warn};

use crate::{error::AppError, platform::OrderEvent, state::AppState};

/// Header the push channel presents its shared token in.
const WEBHOOK_TOKEN_HEADER: &str = "x-webhook-token";

/// Push-channel webhook: ingest one order event.
#[instrument(skip(state, headers, event), fields(order_id = %event.order_id))]
pub async fn ingest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<OrderEvent>,
) -> Result<StatusCode, AppError> {
    if let Some(expected) = &state.config().order_webhook_token {
        let presented = headers
            .get(WEBHOOK_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());
        if presented != Some(expected.expose_secret()) {
            warn!("order webhook presented a bad token");
            return Err(AppError::Unauthorized(
                "invalid webhook token".to_string(),
            ));
        }
    }

    info!(status = %event.status, "order event received");
    state.feed().publish(event);
    Ok(StatusCode::NO_CONTENT)
}

/// SSE stream of live order events for the board.
#[instrument(skip(state))]
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.feed().subscribe();

    let events = stream! {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Ok(sse_event) = Event::default().event("order").json_data(&event) {
                        yield Ok(sse_event);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    // The board fell behind; tell it to refetch the table
                    yield Ok(Event::default().event("lagged").data(skipped.to_string()));
                }
                Err(RecvError::Closed) => break,
            }
        }
    };

    Sse::new(events).keep_alive(KeepAlive::default())
}
