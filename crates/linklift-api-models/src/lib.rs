#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Linklift admin API.
//!
//! These types mirror the wire contract of the campaign backend. The backend
//! is inconsistent in two places (suffix keys arrive as either an array or a
//! comma-joined string; error bodies use either `error` or `message`), so the
//! normalization lives here and nothing downstream sees the legacy shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A campaign pairing an original URL and a target country with the suffix
/// keys used when generating tracking URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Opaque server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Destination URL the generated links redirect to.
    pub original_url: String,
    /// Target country code from the server's country list.
    pub country: String,
    /// Ordered suffix keys; canonical wire form is an array of strings, but
    /// the legacy comma-joined string is accepted on read.
    #[serde(default, deserialize_with = "suffix_keys")]
    pub url_suffix: Vec<String>,
    /// Whether URL generation is permitted; missing means active.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Server-assigned creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

const fn default_active() -> bool {
    true
}

/// Accept suffix keys as either `["a", "b"]` or `"a,b"`, normalising to
/// trimmed, non-empty entries.
fn suffix_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Many(Vec<String>),
        Joined(String),
    }

    let keys = match Option::<Wire>::deserialize(deserializer)? {
        Some(Wire::Many(keys)) => keys,
        Some(Wire::Joined(joined)) => joined.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };
    Ok(keys
        .into_iter()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect())
}

/// One page of campaigns plus the server-echoed pagination metadata.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CampaignPage {
    /// Campaign rows for the requested page.
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    /// Pagination echo for the query that produced this page.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Server-echoed pagination state for the campaign list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number of this result set.
    pub current_page: u32,
    /// Total number of pages for the query.
    pub total_pages: u32,
    /// Total matching campaigns across all pages.
    pub total_count: u64,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_prev_page: bool,
    /// Page size used by the server.
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            has_next_page: false,
            has_prev_page: false,
            limit: 50,
        }
    }
}

/// Request body for creating or replacing a campaign.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    /// Destination URL.
    pub original_url: String,
    /// Target country code.
    pub country: String,
    /// Suffix keys, always serialised as an array.
    pub url_suffix: Vec<String>,
}

/// Body for the partial active-flag update.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToggleActiveRequest {
    /// Desired active state.
    pub is_active: bool,
}

/// A country offered for campaign targeting.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// Code sent back to the server on campaign writes.
    pub code: String,
    /// Display name shown in selectors.
    pub name: String,
}

/// Credentials submitted to the admin login endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Admin email address.
    pub email: String,
    /// Admin password.
    pub password: String,
}

/// Login response; some backend versions nest the token under `data`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token at the top level.
    #[serde(default)]
    pub token: Option<String>,
    /// Envelope used by older backend versions.
    #[serde(default)]
    pub data: Option<TokenEnvelope>,
}

/// Nested token envelope for the legacy login response shape.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenEnvelope {
    /// Bearer token.
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// The bearer token, regardless of which response shape carried it.
    #[must_use]
    pub fn into_token(self) -> Option<String> {
        self.token
            .or_else(|| self.data.and_then(|envelope| envelope.token))
    }
}

/// Body for the authenticated password change.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Password currently on file.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Admin account details shown on the profile page.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    /// Account email address.
    pub email: String,
    /// Display name, when the account has one.
    #[serde(default)]
    pub name: Option<String>,
    /// Timestamp of the most recent login.
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    /// Account creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Envelope wrapping the profile payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    /// The profile itself.
    pub data: AdminProfile,
}

/// Campaign counts for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// All campaigns on the account.
    #[serde(default)]
    pub total_campaigns: u64,
    /// Campaigns with generation enabled.
    #[serde(default)]
    pub active_campaigns: u64,
    /// Campaigns with generation disabled.
    #[serde(default)]
    pub inactive_campaigns: u64,
}

/// Most recent generated URL for a campaign; all fields are absent when
/// nothing has been generated yet.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedUrlLatest {
    /// Query-string fragment appended to the original URL.
    #[serde(default)]
    pub generate_suffix: Option<String>,
    /// Proxy address the generation ran through.
    #[serde(default)]
    pub proxy_ip: Option<String>,
    /// When the URL was generated.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GeneratedUrlLatest {
    /// Whether a generated URL exists for the campaign.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.generate_suffix.is_some()
    }
}

/// Body for requesting a fresh generated URL.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateUrlRequest {
    /// Campaign the URL belongs to.
    pub campaign_id: String,
    /// Base URL the suffix is appended to.
    pub base_generate_url: String,
    /// Target country code.
    pub country: String,
}

/// Error document returned on non-2xx responses. The backend uses `error` or
/// `message` interchangeably, plus optional per-field validation errors.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Primary error text under the `error` key.
    #[serde(default)]
    pub error: Option<String>,
    /// Primary error text under the `message` key.
    #[serde(default)]
    pub message: Option<String>,
    /// Field-level validation messages keyed by field name.
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiErrorBody {
    /// The error text, whichever key the backend used.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_accepts_array_suffix_keys() {
        let campaign: Campaign = serde_json::from_str(
            r#"{"_id":"abc","originalUrl":"https://a.com","country":"us",
                "urlSuffix":["ref", " clickid ", ""],"isActive":true}"#,
        )
        .unwrap();
        assert_eq!(campaign.id, "abc");
        assert_eq!(campaign.url_suffix, vec!["ref", "clickid"]);
    }

    #[test]
    fn campaign_accepts_joined_suffix_keys() {
        let campaign: Campaign = serde_json::from_str(
            r#"{"id":"abc","originalUrl":"https://a.com","country":"us",
                "urlSuffix":"ref, clickid,,src"}"#,
        )
        .unwrap();
        assert_eq!(campaign.url_suffix, vec!["ref", "clickid", "src"]);
    }

    #[test]
    fn campaign_defaults_to_active_with_no_keys() {
        let campaign: Campaign = serde_json::from_str(
            r#"{"id":"abc","originalUrl":"https://a.com","country":"us"}"#,
        )
        .unwrap();
        assert!(campaign.is_active);
        assert!(campaign.url_suffix.is_empty());
        assert!(campaign.created_at.is_none());
    }

    #[test]
    fn payload_serialises_suffix_keys_as_array() {
        let payload = CampaignPayload {
            original_url: "https://a.com".into(),
            country: "us".into(),
            url_suffix: vec!["ref".into()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["urlSuffix"], serde_json::json!(["ref"]));
        assert_eq!(json["originalUrl"], "https://a.com");
    }

    #[test]
    fn error_body_prefers_error_over_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"nope","message":"other"}"#).unwrap();
        assert_eq!(body.detail(), Some("nope"));
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"other"}"#).unwrap();
        assert_eq!(body.detail(), Some("other"));
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail(), None);
    }

    #[test]
    fn login_token_is_found_in_either_shape() {
        let flat: LoginResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        assert_eq!(flat.into_token().as_deref(), Some("t1"));
        let nested: LoginResponse =
            serde_json::from_str(r#"{"data":{"token":"t2"}}"#).unwrap();
        assert_eq!(nested.into_token().as_deref(), Some("t2"));
        let empty: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_token().is_none());
    }

    #[test]
    fn generated_url_presence_follows_suffix() {
        let absent = GeneratedUrlLatest::default();
        assert!(!absent.is_present());
        let present: GeneratedUrlLatest = serde_json::from_str(
            r#"{"generateSuffix":"ref=x1","proxyIp":"10.0.0.1"}"#,
        )
        .unwrap();
        assert!(present.is_present());
    }

    #[test]
    fn pagination_default_matches_server_initial_echo() {
        let pagination = Pagination::default();
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.limit, 50);
        assert!(!pagination.has_next_page);
    }
}
