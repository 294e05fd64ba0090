//! HTTP client for the admin API (REST).
//!
//! # Design
//! - One client per app boot; auth state is swapped via interior mutability
//!   instead of rebuilding the client.
//! - Non-2xx responses decode into [`ApiError`] carrying the server's
//!   message and any field-level validation errors.
//! - A 401 on an authenticated call clears the stored token and forces
//!   navigation to the login route before the error propagates; the one
//!   public read opts out of both the bearer header and that handling.

use crate::app::preferences::clear_token_storage;
use crate::core::logic::{self, PAGE_SIZE, StatusFilter};
use gloo::console;
use gloo::utils::window;
use gloo_net::http::{Request, Response};
use linklift_api_models::{
    AdminProfile, ApiErrorBody, Campaign, CampaignPage, CampaignPayload, ChangePasswordRequest,
    Country, DashboardStats, GenerateUrlRequest, GeneratedUrlLatest, LoginRequest, LoginResponse,
    ProfileResponse, ToggleActiveRequest,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Error surfaced by every API operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    /// HTTP status, or 0 when the request never reached the server.
    pub status: u16,
    /// Server-provided message, or a generic fallback.
    pub message: String,
    /// Field-level validation messages keyed by field name.
    pub field_errors: BTreeMap<String, String>,
}

impl ApiError {
    /// Whether this failure is the duplicate-URL conflict.
    pub(crate) const fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(value: gloo_net::Error) -> Self {
        Self {
            status: 0,
            message: value.to_string(),
            field_errors: BTreeMap::new(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(token),
        }
    }

    /// Swap the bearer token used for subsequent requests.
    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn bearer(&self, request: Request) -> Request {
        match self.token.borrow().as_deref() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    async fn fail(response: Response, authed: bool) -> ApiError {
        let status = response.status();
        let body: ApiErrorBody = response.json().await.unwrap_or_default();
        if status == 401 && authed {
            clear_token_storage();
            redirect_to_login();
            return ApiError {
                status,
                message: "Authentication failed. Please login again.".to_string(),
                field_errors: BTreeMap::new(),
            };
        }
        ApiError {
            status,
            message: body
                .detail()
                .unwrap_or("API request failed")
                .to_string(),
            field_errors: body.errors.unwrap_or_default(),
        }
    }

    async fn ok_json<T: DeserializeOwned>(
        response: Response,
        authed: bool,
    ) -> Result<T, ApiError> {
        if response.ok() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::fail(response, authed).await)
        }
    }

    async fn ok_empty(response: Response, authed: bool) -> Result<(), ApiError> {
        if response.ok() {
            Ok(())
        } else {
            Err(Self::fail(response, authed).await)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.bearer(Request::get(&self.url(path))).send().await?;
        Self::ok_json(response, true).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: Request,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self.bearer(request).json(body)?.send().await?;
        Self::ok_json(response, true).await
    }

    /// Exchange credentials for a bearer token. Unlike every other call this
    /// one never triggers the global 401 handling: a rejected login is a
    /// normal, locally handled failure.
    pub(crate) async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&self.url("/admin/login"))
            .json(request)?
            .send()
            .await?;
        Self::ok_json(response, false).await
    }

    /// Probe whether the stored token is still accepted.
    pub(crate) async fn validate_session(&self) -> Result<(), ApiError> {
        let response = self
            .bearer(Request::get(&self.url("/admin/validate")))
            .send()
            .await?;
        Self::ok_empty(response, true).await
    }

    pub(crate) async fn fetch_profile(&self) -> Result<AdminProfile, ApiError> {
        let envelope: ProfileResponse = self.get_json("/admin/profile").await?;
        Ok(envelope.data)
    }

    pub(crate) async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<(), ApiError> {
        let response = self
            .bearer(Request::put(&self.url("/admin/change-password")))
            .json(request)?
            .send()
            .await?;
        Self::ok_empty(response, true).await
    }

    pub(crate) async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError> {
        self.get_json("/admin/countries").await
    }

    pub(crate) async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard/stats").await
    }

    /// Fetch one page of campaigns for the given filters.
    pub(crate) async fn fetch_campaigns(
        &self,
        page: u32,
        search: &str,
        status: StatusFilter,
    ) -> Result<CampaignPage, ApiError> {
        self.get_json(&logic::build_campaigns_path(page, PAGE_SIZE, search, status))
            .await
    }

    pub(crate) async fn fetch_campaign_by_url(
        &self,
        original_url: &str,
    ) -> Result<Campaign, ApiError> {
        self.get_json(&logic::campaign_by_url_path(original_url))
            .await
    }

    pub(crate) async fn create_campaign(
        &self,
        payload: &CampaignPayload,
    ) -> Result<Campaign, ApiError> {
        self.send_json(Request::post(&self.url("/campaign")), payload)
            .await
    }

    pub(crate) async fn update_campaign(
        &self,
        id: &str,
        payload: &CampaignPayload,
    ) -> Result<Campaign, ApiError> {
        self.send_json(Request::put(&self.url(&format!("/campaign/{id}"))), payload)
            .await
    }

    pub(crate) async fn set_campaign_active(
        &self,
        id: &str,
        is_active: bool,
    ) -> Result<Campaign, ApiError> {
        self.send_json(
            Request::patch(&self.url(&format!("/campaign/{id}/active"))),
            &ToggleActiveRequest { is_active },
        )
        .await
    }

    pub(crate) async fn delete_campaign(&self, original_url: &str) -> Result<(), ApiError> {
        let response = self
            .bearer(Request::delete(
                &self.url(&logic::campaign_by_url_path(original_url)),
            ))
            .send()
            .await?;
        Self::ok_empty(response, true).await
    }

    pub(crate) async fn delete_generated_urls(&self, campaign_id: &str) -> Result<(), ApiError> {
        let response = self
            .bearer(Request::delete(
                &self.url(&format!("/generate-urls/{campaign_id}")),
            ))
            .send()
            .await?;
        Self::ok_empty(response, true).await
    }

    /// Public read: the latest generated URL for a campaign. No bearer
    /// header, and a 401 here never clears the session.
    pub(crate) async fn fetch_latest_generated_url(
        &self,
        campaign_id: &str,
    ) -> Result<GeneratedUrlLatest, ApiError> {
        let response = Request::get(&self.url(&format!("/generate-urls/{campaign_id}")))
            .send()
            .await?;
        Self::ok_json(response, false).await
    }

    pub(crate) async fn generate_url(&self, request: &GenerateUrlRequest) -> Result<(), ApiError> {
        let response = self
            .bearer(Request::post(&self.url("/generate-url")))
            .json(request)?
            .send()
            .await?;
        Self::ok_empty(response, true).await
    }
}

fn redirect_to_login() {
    if window().location().set_href("/login").is_err() {
        console::error!("failed to navigate to the login route");
    }
}
