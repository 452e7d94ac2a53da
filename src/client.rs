use std::time::Duration;

use reqwest::{header::HeaderMap, StatusCode};

use crate::{
    checksum::request_checksum, BadsecError, ClientOptions, RequestParams, Response, Result,
};

/// Host the BADSEC server listens on by default.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the BADSEC server listens on by default.
pub const DEFAULT_PORT: u16 = 8888;

const AUTH_PATH: &str = "/auth";
const USERS_PATH: &str = "/users";

/// Response header carrying the issued auth token.
const AUTH_TOKEN_HEADER: &str = "badsec-authentication-token";
/// Request header carrying the per-request checksum.
const CHECKSUM_HEADER: &str = "X-Request-Checksum";

/// HTTP client for the BADSEC NOC list endpoints.
#[derive(Clone, Debug)]
pub struct BadsecClient {
    http: reqwest::Client,
    host: String,
    port: u16,
    options: ClientOptions,
}

impl BadsecClient {
    /// Creates a client for a server at `host:port`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use badsec_http::{BadsecClient, DEFAULT_HOST, DEFAULT_PORT};
    ///
    /// let client = BadsecClient::new(DEFAULT_HOST, DEFAULT_PORT);
    /// ```
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            http: reqwest::Client::new(),
            host: host.into(),
            port,
            options: ClientOptions::default(),
        }
    }

    /// Applies client options such as timeout and retry budget.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Fetches an auth token from the `/auth` endpoint.
    ///
    /// The token arrives in the `Badsec-Authentication-Token` response
    /// header; the header name is matched case-insensitively and the body is
    /// ignored. Fails with [`BadsecError::MissingTokenHeader`] when the
    /// header is absent or not readable as a string.
    pub async fn auth_token(&self) -> Result<String> {
        let params = RequestParams::head(&self.host, self.port, AUTH_PATH);
        let response = self.send_with_retries(&params).await?;
        let token = extract_auth_token(&response.headers)?;
        tracing::debug!("fetched auth token");
        Ok(token)
    }

    /// Fetches the NOC user id list from the `/users` endpoint.
    ///
    /// The request carries `X-Request-Checksum`, the hex SHA-256 of
    /// `"{token}/users"`, which the server verifies against the token it
    /// issued. The body is split on `'\n'` verbatim, so a trailing newline
    /// produces a trailing empty segment.
    pub async fn user_ids(&self, token: &str) -> Result<Vec<String>> {
        let params = RequestParams::get(&self.host, self.port, USERS_PATH)
            .with_header(CHECKSUM_HEADER, request_checksum(token, USERS_PATH));
        let response = self.send_with_retries(&params).await?;
        let ids = split_identifiers(&response.body);
        tracing::debug!(count = ids.len(), "fetched user ids");
        Ok(ids)
    }

    /// Sends a request, retrying failed attempts up to the configured budget.
    ///
    /// Attempts run strictly one after another with no delay in between. The
    /// first success returns immediately; each earlier failure is logged at
    /// `warn` level. Once the budget is spent the last failure is returned
    /// wrapped in [`BadsecError::RetriesExhausted`]. A budget of zero is
    /// rejected with [`BadsecError::InvalidRetryBudget`] before any network
    /// activity.
    pub async fn send_with_retries(&self, params: &RequestParams) -> Result<Response> {
        let allowed = self.options.allowed_retries;
        if allowed < 1 {
            return Err(BadsecError::InvalidRetryBudget(allowed));
        }

        let mut attempt = 1u32;
        loop {
            match self.send_once(params).await {
                Ok(response) => return Ok(response),
                Err(failure) if attempt < allowed => {
                    tracing::warn!(
                        attempt,
                        allowed,
                        error = %failure,
                        "request failed, retrying"
                    );
                    attempt += 1;
                }
                Err(failure) => {
                    return Err(BadsecError::RetriesExhausted {
                        attempts: allowed,
                        source: Box::new(failure),
                    });
                }
            }
        }
    }

    /// Performs exactly one round trip: one connection, no retries.
    ///
    /// Only a 200 counts as success; the body is drained in full before
    /// returning so the connection is not left mid-stream.
    async fn send_once(&self, params: &RequestParams) -> Result<Response> {
        let mut request = self
            .http
            .request(params.method.clone(), params.url())
            .timeout(Duration::from_millis(self.options.timeout_ms));
        for (name, value) in &params.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(BadsecError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BadsecError::UnexpectedStatus {
                status: status.as_u16(),
                path: params.path.clone(),
            });
        }

        let headers = response.headers().clone();
        let body = response.text().await.map_err(BadsecError::Transport)?;
        Ok(Response { headers, body })
    }
}

fn extract_auth_token(headers: &HeaderMap) -> Result<String> {
    let value = headers
        .get(AUTH_TOKEN_HEADER)
        .ok_or(BadsecError::MissingTokenHeader)?;
    let token = value
        .to_str()
        .map_err(|_| BadsecError::MissingTokenHeader)?;
    Ok(token.to_owned())
}

fn split_identifiers(body: &str) -> Vec<String> {
    body.split('\n').map(str::to_owned).collect()
}
