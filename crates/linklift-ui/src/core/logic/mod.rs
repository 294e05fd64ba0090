//! Pure UI helpers extracted from components for non-wasm testing.

use chrono::{DateTime, Utc};
use linklift_api_models::CampaignPayload;
use std::fmt::Write;
use url::Url;

/// Fixed page size for the campaign list.
pub const PAGE_SIZE: u32 = 50;

/// Status filter applied to the campaign list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status constraint.
    #[default]
    All,
    /// Only campaigns with generation enabled.
    Active,
    /// Only campaigns with generation disabled.
    Inactive,
}

impl StatusFilter {
    /// All filter options in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::All, Self::Active, Self::Inactive]
    }

    /// Value sent as the `status` query parameter; `None` means omit it.
    #[must_use]
    pub const fn as_query(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Active => Some("active"),
            Self::Inactive => Some("inactive"),
        }
    }

    /// Label shown in the filter selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Parse a selector value back into a filter.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            _ => Self::All,
        }
    }
}

/// Build the campaign list path. `page` and `limit` are always present;
/// `search` only when the trimmed term is non-empty; `status` only when the
/// filter is narrower than [`StatusFilter::All`].
#[must_use]
pub fn build_campaigns_path(page: u32, limit: u32, search: &str, status: StatusFilter) -> String {
    let mut path = format!("/campaigns?page={page}&limit={limit}");
    let term = search.trim();
    if !term.is_empty() {
        let _ = write!(path, "&search={}", urlencoding::encode(term));
    }
    if let Some(status) = status.as_query() {
        let _ = write!(path, "&status={status}");
    }
    path
}

/// Path for campaign lookup and deletion keyed by the original URL.
#[must_use]
pub fn campaign_by_url_path(original_url: &str) -> String {
    format!("/campaign/{}", urlencoding::encode(original_url))
}

/// Trim suffix keys and drop the empty ones, preserving order.
#[must_use]
pub fn clean_suffix_keys(keys: &[String]) -> Vec<String> {
    keys.iter()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect()
}

/// Placeholder shown when no usable suffix keys exist yet.
pub const EMPTY_PREVIEW: &str = "No valid keys yet";

/// Render the suffix-key preview: trimmed, non-empty keys joined as
/// `key={random}&...`, or [`EMPTY_PREVIEW`] when nothing remains.
#[must_use]
pub fn suffix_preview(keys: &[String]) -> String {
    let cleaned = clean_suffix_keys(keys);
    if cleaned.is_empty() {
        EMPTY_PREVIEW.to_string()
    } else {
        cleaned
            .iter()
            .map(|key| format!("{key}={{random}}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Join a campaign's original URL with a generated suffix, using `&` when the
/// original already carries a query string and `?` otherwise.
#[must_use]
pub fn join_generated_url(original_url: &str, suffix: &str) -> String {
    let separator = if original_url.contains('?') { '&' } else { '?' };
    format!("{original_url}{separator}{suffix}")
}

/// Whether a value parses as an absolute http(s) URL.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Field-level validation errors for the campaign form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignFormErrors {
    /// Problem with the original URL, if any.
    pub original_url: Option<String>,
    /// Problem with the country selection, if any.
    pub country: Option<String>,
    /// Problem with the suffix-key list, if any.
    pub url_suffix: Option<String>,
}

impl CampaignFormErrors {
    /// True when no field carries an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.original_url.is_none() && self.country.is_none() && self.url_suffix.is_none()
    }
}

/// Validate the campaign form and produce the write payload. Suffix keys are
/// trimmed and empties dropped before the at-least-one check.
///
/// # Errors
/// Returns [`CampaignFormErrors`] with a message per offending field.
pub fn validate_campaign_form(
    original_url: &str,
    country: &str,
    suffix_keys: &[String],
) -> Result<CampaignPayload, CampaignFormErrors> {
    let mut errors = CampaignFormErrors::default();
    let original_url = original_url.trim();
    if original_url.is_empty() {
        errors.original_url = Some("Original URL is required".to_string());
    } else if !is_valid_url(original_url) {
        errors.original_url = Some("Enter a valid URL".to_string());
    }
    if country.trim().is_empty() {
        errors.country = Some("Country is required".to_string());
    }
    let cleaned = clean_suffix_keys(suffix_keys);
    if cleaned.is_empty() {
        errors.url_suffix = Some("At least one URL suffix key is required".to_string());
    }
    if errors.is_empty() {
        Ok(CampaignPayload {
            original_url: original_url.to_string(),
            country: country.trim().to_string(),
            url_suffix: cleaned,
        })
    } else {
        Err(errors)
    }
}

/// Attach server-side field errors to the form's error slots. Unknown field
/// names are ignored; the caller falls back to a generic toast when nothing
/// maps.
#[must_use]
pub fn form_errors_from_fields(
    fields: &std::collections::BTreeMap<String, String>,
) -> CampaignFormErrors {
    CampaignFormErrors {
        original_url: fields.get("originalUrl").cloned(),
        country: fields.get("country").cloned(),
        url_suffix: fields.get("urlSuffix").cloned(),
    }
}

/// One phase of the campaign deletion flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteStep {
    /// Resolve the campaign id from its original URL.
    ResolveId,
    /// Delete the campaign's generated URL collection.
    DeleteGeneratedUrls,
    /// Delete the campaign itself.
    DeleteCampaign,
}

/// Plan the deletion phases. Without the cascade acknowledgment the plan
/// never touches generated URLs.
#[must_use]
pub fn delete_plan(cascade: bool) -> Vec<DeleteStep> {
    if cascade {
        vec![
            DeleteStep::ResolveId,
            DeleteStep::DeleteGeneratedUrls,
            DeleteStep::DeleteCampaign,
        ]
    } else {
        vec![DeleteStep::DeleteCampaign]
    }
}

/// User-facing copy for a failure at the given deletion phase. The flow is
/// two-phase and non-transactional, so each message names what survived.
#[must_use]
pub const fn delete_failure_message(step: DeleteStep) -> &'static str {
    match step {
        DeleteStep::ResolveId => "Could not look up the campaign; nothing was deleted",
        DeleteStep::DeleteGeneratedUrls => {
            "Generated URLs could not be deleted; campaign kept, retry"
        }
        DeleteStep::DeleteCampaign => {
            "Campaign could not be deleted (its generated URLs may already be gone), retry"
        }
    }
}

/// Login form validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginError {
    /// Email or password missing.
    MissingFields,
    /// Email does not look like an address.
    InvalidEmail,
    /// Password shorter than the minimum.
    ShortPassword,
}

impl LoginError {
    /// Toast copy for the failure.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "All fields are required",
            Self::InvalidEmail => "Invalid email format",
            Self::ShortPassword => "Password must be at least 6 characters",
        }
    }
}

/// Loose email shape check: something, an `@`, something, a dot, something.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.contains(char::is_whitespace)
}

/// Validate login input before any network call.
///
/// # Errors
/// Returns the first failing [`LoginError`] in field order.
pub fn validate_login(email: &str, password: &str) -> Result<(), LoginError> {
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(LoginError::InvalidEmail);
    }
    if password.len() < 6 {
        return Err(LoginError::ShortPassword);
    }
    Ok(())
}

/// Live strength checklist for the change-password form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordChecklist {
    /// At least eight characters.
    pub length: bool,
    /// Contains a lowercase letter.
    pub lowercase: bool,
    /// Contains an uppercase letter.
    pub uppercase: bool,
    /// Contains a digit.
    pub digit: bool,
    /// Contains a special character.
    pub special: bool,
    /// Confirmation matches and is non-empty.
    pub matches: bool,
}

/// Evaluate the checklist for a candidate password and its confirmation.
#[must_use]
pub fn password_checklist(new_password: &str, confirm: &str) -> PasswordChecklist {
    PasswordChecklist {
        length: new_password.len() >= 8,
        lowercase: new_password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: new_password.chars().any(|c| c.is_ascii_uppercase()),
        digit: new_password.chars().any(|c| c.is_ascii_digit()),
        special: new_password
            .chars()
            .any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)),
        matches: !new_password.is_empty() && new_password == confirm,
    }
}

/// Change-password validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangePasswordError {
    /// One of the three fields is empty.
    MissingFields,
    /// New password and confirmation differ.
    Mismatch,
    /// New password shorter than the minimum.
    TooShort,
}

impl ChangePasswordError {
    /// Inline copy for the failure.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "All fields are required.",
            Self::Mismatch => "New passwords do not match.",
            Self::TooShort => "New password must be at least 8 characters.",
        }
    }
}

/// Validate the change-password form before submission.
///
/// # Errors
/// Returns the first failing [`ChangePasswordError`] in field order.
pub fn validate_change_password(
    current: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(), ChangePasswordError> {
    if current.is_empty() || new_password.is_empty() || confirm.is_empty() {
        return Err(ChangePasswordError::MissingFields);
    }
    if new_password != confirm {
        return Err(ChangePasswordError::Mismatch);
    }
    if new_password.len() < 8 {
        return Err(ChangePasswordError::TooShort);
    }
    Ok(())
}

/// Render a server timestamp the way the tables and detail view show it.
#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%b %e, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn campaigns_path_always_carries_page_and_limit() {
        assert_eq!(
            build_campaigns_path(1, 50, "", StatusFilter::All),
            "/campaigns?page=1&limit=50"
        );
        assert_eq!(
            build_campaigns_path(3, 50, "   ", StatusFilter::All),
            "/campaigns?page=3&limit=50"
        );
    }

    #[test]
    fn campaigns_path_appends_search_and_status_conditionally() {
        assert_eq!(
            build_campaigns_path(1, 50, " shop deals ", StatusFilter::Active),
            "/campaigns?page=1&limit=50&search=shop%20deals&status=active"
        );
        assert_eq!(
            build_campaigns_path(2, 50, "", StatusFilter::Inactive),
            "/campaigns?page=2&limit=50&status=inactive"
        );
    }

    #[test]
    fn campaign_by_url_path_is_url_encoded() {
        assert_eq!(
            campaign_by_url_path("https://a.com/x?y=1"),
            "/campaign/https%3A%2F%2Fa.com%2Fx%3Fy%3D1"
        );
    }

    #[test]
    fn preview_joins_cleaned_keys() {
        let keys = vec![" ref ".to_string(), String::new(), "clickid".to_string()];
        assert_eq!(suffix_preview(&keys), "ref={random}&clickid={random}");
    }

    #[test]
    fn preview_of_no_usable_keys_is_the_placeholder() {
        assert_eq!(suffix_preview(&[]), EMPTY_PREVIEW);
        assert_eq!(suffix_preview(&["  ".to_string()]), EMPTY_PREVIEW);
    }

    #[test]
    fn generated_url_join_picks_separator() {
        assert_eq!(
            join_generated_url("https://a.com/page", "ref=x"),
            "https://a.com/page?ref=x"
        );
        assert_eq!(
            join_generated_url("https://a.com/page?utm=1", "ref=x"),
            "https://a.com/page?utm=1&ref=x"
        );
    }

    #[test]
    fn url_validation_requires_absolute_http() {
        assert!(is_valid_url("https://a.com"));
        assert!(is_valid_url("http://a.com/path?q=1"));
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("ftp://a.com"));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn form_validation_reports_per_field() {
        let err = validate_campaign_form("not-a-url", "", &[]).unwrap_err();
        assert_eq!(err.original_url.as_deref(), Some("Enter a valid URL"));
        assert_eq!(err.country.as_deref(), Some("Country is required"));
        assert_eq!(
            err.url_suffix.as_deref(),
            Some("At least one URL suffix key is required")
        );
    }

    #[test]
    fn form_validation_builds_trimmed_payload() {
        let payload = validate_campaign_form(
            " https://a.com ",
            "us",
            &[" ref ".to_string(), String::new()],
        )
        .unwrap();
        assert_eq!(payload.original_url, "https://a.com");
        assert_eq!(payload.country, "us");
        assert_eq!(payload.url_suffix, vec!["ref"]);
    }

    #[test]
    fn server_field_errors_map_onto_form_slots() {
        let mut fields = std::collections::BTreeMap::new();
        fields.insert("originalUrl".to_string(), "already taken".to_string());
        fields.insert("unknown".to_string(), "ignored".to_string());
        let errors = form_errors_from_fields(&fields);
        assert_eq!(errors.original_url.as_deref(), Some("already taken"));
        assert!(errors.country.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn delete_plan_without_cascade_never_touches_generated_urls() {
        assert_eq!(delete_plan(false), vec![DeleteStep::DeleteCampaign]);
        assert_eq!(
            delete_plan(true),
            vec![
                DeleteStep::ResolveId,
                DeleteStep::DeleteGeneratedUrls,
                DeleteStep::DeleteCampaign,
            ]
        );
    }

    #[test]
    fn delete_failure_copy_names_the_partial_state() {
        assert!(delete_failure_message(DeleteStep::DeleteGeneratedUrls).contains("campaign kept"));
        assert!(delete_failure_message(DeleteStep::DeleteCampaign).contains("retry"));
    }

    #[test]
    fn login_validation_orders_failures() {
        assert_eq!(validate_login("", ""), Err(LoginError::MissingFields));
        assert_eq!(
            validate_login("nope", "secret1"),
            Err(LoginError::InvalidEmail)
        );
        assert_eq!(
            validate_login("a@b.com", "short"),
            Err(LoginError::ShortPassword)
        );
        assert!(validate_login("a@b.com", "secret1").is_ok());
    }

    #[test]
    fn email_shape_check_matches_the_loose_pattern() {
        assert!(is_valid_email("admin@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("admin@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn password_checklist_tracks_each_rule() {
        let weak = password_checklist("abc", "");
        assert!(!weak.length && weak.lowercase && !weak.uppercase);
        assert!(!weak.matches);
        let strong = password_checklist("Str0ng!pass", "Str0ng!pass");
        assert!(
            strong.length
                && strong.lowercase
                && strong.uppercase
                && strong.digit
                && strong.special
                && strong.matches
        );
    }

    #[test]
    fn change_password_validation_orders_failures() {
        assert_eq!(
            validate_change_password("", "x", "x"),
            Err(ChangePasswordError::MissingFields)
        );
        assert_eq!(
            validate_change_password("old", "newpass12", "different"),
            Err(ChangePasswordError::Mismatch)
        );
        assert_eq!(
            validate_change_password("old", "short", "short"),
            Err(ChangePasswordError::TooShort)
        );
        assert!(validate_change_password("old", "newpass12", "newpass12").is_ok());
    }

    #[test]
    fn timestamps_render_compactly() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "Mar  7, 2026 09:05");
    }
}
