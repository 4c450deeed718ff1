//! Infrastructure implementation of the `PlatformClient` port against the
//! Heroku Platform API (v3).
//!
//! The credential is resolved on the first request and cached, so commands
//! that fail before touching the network never need one.

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::application::ports::PlatformClient;
use crate::domain::{App, AuthToken, BuildStatus, HappyError, Settings};
use crate::infra::credentials::CredentialSource;

/// Media type selecting version 3 of the Platform API.
pub const HEROKU_ACCEPT: &str = "application/vnd.heroku+json; version=3";

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AppResponse {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct CreateBuildRequest<'a> {
    source_blob: SourceBlob<'a>,
}

#[derive(Debug, Serialize)]
struct SourceBlob<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct BuildResponse {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ── Client ────────────────────────────────────────────────────────────────────

/// Production `PlatformClient`: one `reqwest` request per operation.
pub struct HerokuClient {
    http: reqwest::Client,
    base: Url,
    credentials: CredentialSource,
    token: OnceCell<AuthToken>,
}

impl HerokuClient {
    /// Build a client for `settings.api_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid or the HTTP client cannot be
    /// constructed.
    pub fn new(settings: &Settings, credentials: CredentialSource) -> Result<Self> {
        let base = Url::parse(&settings.api_url)
            .with_context(|| format!("invalid API URL {}", settings.api_url))?;
        anyhow::ensure!(
            !base.cannot_be_a_base(),
            "invalid API URL {}",
            settings.api_url
        );

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(HEROKU_ACCEPT));

        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.request_timeout)
            .default_headers(headers)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            http,
            base,
            credentials,
            token: OnceCell::new(),
        })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn token(&self) -> Result<&AuthToken> {
        self.token
            .get_or_try_init(|| self.credentials.resolve())
            .await
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.url(segments);
        tracing::debug!(method = %method, url = %url, "heroku api request");
        self.http.request(method, url)
    }

    /// Send with bearer auth and map a non-2xx reply to `HappyError::Api`.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let token = self.token().await?;
        let response = request
            .bearer_auth(token.expose())
            .send()
            .await
            .context("request to Heroku API failed")?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| body.trim().to_string());
        tracing::debug!(status = status.as_u16(), %message, "heroku api error");
        Err(HappyError::Api {
            status: status.as_u16(),
            message,
        }
        .into())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.execute(request)
            .await?
            .json::<T>()
            .await
            .context("parsing Heroku API response")
    }
}

impl PlatformClient for HerokuClient {
    async fn create_app(&self) -> Result<App> {
        let app: AppResponse = self
            .send(self.request(Method::POST, &["apps"]))
            .await
            .context("creating app")?;
        Ok(App {
            id: app.id,
            name: app.name,
        })
    }

    async fn create_build(&self, app_id: &str, tarball_url: &str) -> Result<String> {
        let body = CreateBuildRequest {
            source_blob: SourceBlob { url: tarball_url },
        };
        let build: BuildResponse = self
            .send(
                self.request(Method::POST, &["apps", app_id, "builds"])
                    .json(&body),
            )
            .await
            .context("starting build")?;
        tracing::debug!(build_id = %build.id, status = %build.status, "build created");
        Ok(build.id)
    }

    async fn build_status(&self, app_id: &str, build_id: &str) -> Result<BuildStatus> {
        let build: BuildResponse = self
            .send(self.request(Method::GET, &["apps", app_id, "builds", build_id]))
            .await
            .context("checking build status")?;
        Ok(BuildStatus::new(build.status))
    }

    async fn delete_app(&self, app_name: &str) -> Result<()> {
        // The reply body is not needed; a 2xx status is enough.
        self.execute(self.request(Method::DELETE, &["apps", app_name]))
            .await
            .with_context(|| format!("deleting app {app_name}"))?;
        Ok(())
    }
}
