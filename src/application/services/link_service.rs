//! Link Service
//!
//! Validates (type, payload) pairs and composes universal deep links with
//! deferred-deep-linking fallback parameters.

use std::sync::Arc;

use serde_json::Value;

use crate::config::LinkSettings;
use crate::domain::{DeepLink, LinkRequest, LinkType};
use crate::shared::encoding::encode_component;

/// Link service errors.
///
/// All variants are terminal and caller-correctable; nothing here is
/// retryable. Validation stops at the first violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("Payload is required for this link type.")]
    MissingPayload,

    #[error("{field} is required for {link_type} links.")]
    MissingRequiredField {
        link_type: LinkType,
        field: &'static str,
    },

    #[error("Invalid link type: {0}")]
    UnknownLinkType(String),
}

/// Validates link payloads and composes deep links.
///
/// Pure computation over the immutable link settings: no I/O, no hidden
/// state, identical inputs always yield identical links.
#[derive(Clone)]
pub struct LinkService {
    settings: Arc<LinkSettings>,
}

impl LinkService {
    /// Create a link service over the given composition constants.
    pub fn new(settings: LinkSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Validate a raw (type, payload) pair into a typed [`LinkRequest`].
    ///
    /// # Errors
    ///
    /// - [`LinkError::UnknownLinkType`] if `link_type` is not a wire name
    /// - [`LinkError::MissingPayload`] if the payload is absent or null for
    ///   a type that requires one
    /// - [`LinkError::MissingRequiredField`] on the first required key that
    ///   is absent or empty
    pub fn validate(
        &self,
        link_type: &str,
        payload: Option<&Value>,
    ) -> Result<LinkRequest, LinkError> {
        let link_type = LinkType::from_name(link_type)
            .ok_or_else(|| LinkError::UnknownLinkType(link_type.to_string()))?;

        let payload = payload.filter(|value| !value.is_null());
        if payload.is_none() && link_type.requires_payload() {
            return Err(LinkError::MissingPayload);
        }
        let payload = payload.unwrap_or(&Value::Null);

        let request = match link_type {
            LinkType::Invitation => LinkRequest::Invitation {
                event_id: required_field(link_type, payload, "eventId")?,
            },
            LinkType::ResetPassword => LinkRequest::ResetPassword {
                token: required_field(link_type, payload, "token")?,
            },
            LinkType::Attendance => LinkRequest::Attendance {
                event_id: required_field(link_type, payload, "eventId")?,
            },
            LinkType::ShareApp => LinkRequest::ShareApp,
            LinkType::SubAdminInvite => LinkRequest::SubAdminInvite {
                event_id: required_field(link_type, payload, "eventId")?,
                invited_user_id: required_field(link_type, payload, "invitedUserId")?,
            },
        };

        Ok(request)
    }

    /// Generate a universal deep link for the given (type, payload) pair.
    ///
    /// Validation failures propagate unchanged; no partial link is produced.
    pub fn generate(
        &self,
        link_type: &str,
        payload: Option<&Value>,
    ) -> Result<DeepLink, LinkError> {
        let request = self.validate(link_type, payload)?;
        Ok(self.compose(&request))
    }

    /// Compose the final link for an already validated request.
    ///
    /// The fallback query routes users without the app to the store and
    /// resumes the intended destination after install: `apn` carries the
    /// package id, `link` the encoded target URL, `afl` the encoded store
    /// listing.
    pub fn compose(&self, request: &LinkRequest) -> DeepLink {
        let base_url = format!("{}{}", self.settings.domain, request.path());
        let fallback = format!(
            "apn={}&link={}&afl={}",
            self.settings.package_name,
            encode_component(&base_url),
            encode_component(&self.settings.play_store_url),
        );

        DeepLink::new(format!("{}?{}", base_url, fallback))
    }
}

/// Extract a required payload field.
///
/// Mirrors the wire contract's truthiness rules: absent keys, `null`, empty
/// strings, `false`, and the number `0` all count as missing. Numeric
/// identifiers are accepted and rendered in decimal.
fn required_field(
    link_type: LinkType,
    payload: &Value,
    field: &'static str,
) -> Result<String, LinkError> {
    match payload.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        Some(Value::Number(value)) if value.as_f64() != Some(0.0) => Ok(value.to_string()),
        _ => Err(LinkError::MissingRequiredField { link_type, field }),
    }
}
