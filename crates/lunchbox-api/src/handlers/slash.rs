//! Slash-command handler: authentication, parsing, and dispatch.
//!
//! Accepts the form-encoded payload Slack posts for a slash command,
//! validates the shared token, and dispatches on the first word of the
//! command text. Responses are plain text; Slack renders the body verbatim.

use std::fmt::Write as _;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use lunchbox_core::{Command, Restaurant};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::{error::ApiError, server::AppState};

/// Upper bound on the request body. Slash-command payloads are a few hundred
/// bytes; anything beyond this is not a command.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Number of entries the `list` sub-command returns.
const LIST_LIMIT: i64 = 5;

/// Form fields of a slash-command payload.
///
/// Slack sends more fields (team, channel, user); only these two matter
/// here, the rest are ignored.
#[derive(Debug, Deserialize)]
struct SlashPayload {
    /// Shared secret issued by Slack.
    #[serde(default)]
    token: String,

    /// Command text following the slash command itself.
    #[serde(default)]
    text: String,
}

/// Handles `POST /`, the slash-command endpoint.
///
/// Flow: body read → form decode → token check → sub-command parse →
/// {add | list} → plain-text response. Every failure maps to a variant of
/// [`ApiError`] and is logged where it occurs.
#[instrument(name = "slash_command", skip_all)]
pub async fn slash_command(State(state): State<AppState>, req: Request) -> Response {
    match handle_command(&state, req).await {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Rejects non-POST requests on the command route with the fixed 405 body.
pub async fn method_not_allowed(method: Method) -> ApiError {
    warn!(%method, "rejected non-POST request to command endpoint");
    ApiError::MethodNotAllowed
}

async fn handle_command(state: &AppState, req: Request) -> Result<String, ApiError> {
    let body = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES).await.map_err(|e| {
        error!(error = %e, "failed to read request body");
        ApiError::BodyRead(e.to_string())
    })?;

    let payload: SlashPayload = serde_urlencoded::from_bytes(&body).map_err(|e| {
        error!(error = %e, "failed to decode form payload");
        ApiError::MalformedForm(e.to_string())
    })?;

    if payload.token.as_str() != &*state.slack_token {
        warn!("rejected request with mismatched token");
        return Err(ApiError::Unauthorized);
    }

    let command = Command::parse(&payload.text);

    match command.sub_command.as_str() {
        "add" => {
            let restaurant = state.store.add(command.value.clone()).await.map_err(|e| {
                error!(error = %e, "failed to persist restaurant");
                e
            })?;
            info!(id = %restaurant.id, name = %restaurant.name, "restaurant added");

            // The caller sees exactly what they submitted.
            Ok(command.value)
        },
        "list" => {
            let restaurants = state.store.list_recent(LIST_LIMIT).await.map_err(|e| {
                error!(error = %e, "failed to list restaurants");
                e
            })?;
            info!(count = restaurants.len(), "restaurants listed");

            Ok(render_list(&restaurants))
        },
        // TODO: unknown sub-commands respond 500; switching to 400 needs a
        // coordinated change with the installed Slack app.
        other => {
            warn!(sub_command = other, "invalid sub-command");
            Err(ApiError::InvalidSubCommand)
        },
    }
}

/// Renders the list response, one `[<id>] <name>` line per entity.
///
/// Lines appear in store-return order (newest first). An empty slice renders
/// as an empty string.
fn render_list(restaurants: &[Restaurant]) -> String {
    let mut out = String::new();
    for restaurant in restaurants {
        // Infallible for String; keeps the formatting in one place.
        let _ = writeln!(out, "[{}] {}", restaurant.id, restaurant.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use lunchbox_core::RestaurantId;

    use super::*;

    fn restaurant(id: i64, name: &str) -> Restaurant {
        Restaurant { id: RestaurantId(id), name: name.to_string(), created: Utc::now() }
    }

    #[test]
    fn render_list_formats_one_line_per_entity() {
        let restaurants = vec![restaurant(3, "Sushi Place"), restaurant(1, "Ramen Shop")];

        assert_eq!(render_list(&restaurants), "[3] Sushi Place\n[1] Ramen Shop\n");
    }

    #[test]
    fn render_list_of_empty_slice_is_empty() {
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn payload_decodes_with_missing_fields_defaulted() {
        let payload: SlashPayload = serde_urlencoded::from_str("token=abc").unwrap();
        assert_eq!(payload.token, "abc");
        assert_eq!(payload.text, "");
    }

    #[test]
    fn payload_decodes_percent_encoded_text() {
        let payload: SlashPayload =
            serde_urlencoded::from_str("token=abc&text=add%20Sushi%20Place").unwrap();
        assert_eq!(payload.text, "add Sushi Place");
    }
}
