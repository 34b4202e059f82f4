//! Link Handlers
//!
//! HTTP handlers for the link generation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::application::dto::request::GenerateLinkRequest;
use crate::application::dto::response::GenerateLinkResponse;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Generate a universal deep link
///
/// POST /generate-link
///
/// Validates the payload for the requested link type and returns the
/// composed deep link with deferred-deep-linking fallback parameters.
///
/// ## Request Body
/// - `type`: Wire name of the link type (`invitation`, `resetPassword`,
///   `attendance`, `shareApp`, `subAdminInvite`)
/// - `payload` (optional for `shareApp`): Required keys depend on the type
///
/// ## Errors
/// - 400: Missing/unknown type, missing payload or required field,
///   malformed request body
pub async fn generate_link(
    State(state): State<AppState>,
    body: Result<Json<GenerateLinkRequest>, JsonRejection>,
) -> Result<Json<GenerateLinkResponse>, AppError> {
    // Malformed bodies surface in the same error envelope as validation
    // failures; the wire contract has no other error shape.
    let Json(request) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let link_type = request
        .link_type
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::BadRequest("Link type is required".into()))?;

    let link = state
        .links
        .generate(link_type, request.payload.as_ref())
        .map_err(|error| {
            metrics::record_link_failure(&error);
            error
        })?;

    metrics::record_link_generated(link_type);
    tracing::debug!(link_type, link = %link, "Generated deep link");

    Ok(Json(GenerateLinkResponse::new(link)))
}
