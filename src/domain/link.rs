//! Deep link vocabulary.
//!
//! The set of supported link types is closed and defined at build time.
//! Every link type maps to a path template; the fields the template needs
//! are carried by the matching [`LinkRequest`] variant, so a request that
//! type-checks always has everything required to derive its path.

use serde::Serialize;
use std::fmt;

/// The closed set of supported deep-link categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    /// Invite a user to an event
    Invitation,
    /// Password reset flow
    ResetPassword,
    /// Event attendance check-in
    Attendance,
    /// Generic app share link
    ShareApp,
    /// Invite a sub-admin to manage an event
    SubAdminInvite,
}

impl LinkType {
    /// All supported link types.
    pub const ALL: [LinkType; 5] = [
        LinkType::Invitation,
        LinkType::ResetPassword,
        LinkType::Attendance,
        LinkType::ShareApp,
        LinkType::SubAdminInvite,
    ];

    /// Look up a link type by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "invitation" => Some(LinkType::Invitation),
            "resetPassword" => Some(LinkType::ResetPassword),
            "attendance" => Some(LinkType::Attendance),
            "shareApp" => Some(LinkType::ShareApp),
            "subAdminInvite" => Some(LinkType::SubAdminInvite),
            _ => None,
        }
    }

    /// The wire name clients send in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Invitation => "invitation",
            LinkType::ResetPassword => "resetPassword",
            LinkType::Attendance => "attendance",
            LinkType::ShareApp => "shareApp",
            LinkType::SubAdminInvite => "subAdminInvite",
        }
    }

    /// Whether this link type requires a payload at all.
    pub fn requires_payload(&self) -> bool {
        !matches!(self, LinkType::ShareApp)
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated link request, keyed by [`LinkType`].
///
/// Each variant carries exactly the fields its path template interpolates.
/// Construction happens in the link formatter after payload validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRequest {
    Invitation { event_id: String },
    ResetPassword { token: String },
    Attendance { event_id: String },
    ShareApp,
    SubAdminInvite { event_id: String, invited_user_id: String },
}

impl LinkRequest {
    /// The link type this request was validated against.
    pub fn link_type(&self) -> LinkType {
        match self {
            LinkRequest::Invitation { .. } => LinkType::Invitation,
            LinkRequest::ResetPassword { .. } => LinkType::ResetPassword,
            LinkRequest::Attendance { .. } => LinkType::Attendance,
            LinkRequest::ShareApp => LinkType::ShareApp,
            LinkRequest::SubAdminInvite { .. } => LinkType::SubAdminInvite,
        }
    }

    /// Derive the deep link path segment.
    ///
    /// Field values are inserted verbatim, without percent-encoding. The
    /// deployed app routes match on the raw identifiers, so callers must
    /// supply URL-safe values.
    pub fn path(&self) -> String {
        match self {
            LinkRequest::Invitation { event_id } => format!("/invite/{}", event_id),
            LinkRequest::ResetPassword { token } => format!("/reset-password/{}", token),
            LinkRequest::Attendance { event_id } => format!("/attendance/{}", event_id),
            LinkRequest::ShareApp => "/share".to_string(),
            LinkRequest::SubAdminInvite {
                event_id,
                invited_user_id,
            } => format!("/sub-admin-invite/{}/{}", event_id, invited_user_id),
        }
    }
}

/// A fully composed deep link.
///
/// Value object: the final URL string, with no identity or lifecycle beyond
/// being returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeepLink(String);

impl DeepLink {
    /// Wrap a composed URL string.
    pub fn new(url: String) -> Self {
        Self(url)
    }

    /// Borrow the URL string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the URL string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
