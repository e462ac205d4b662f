// Advent of Code HTTP client.
// Builds the per-day input URL, attaches the session cookie, and checks the response status.

use reqwest::{
    Client, Response, StatusCode, Url,
    header::{COOKIE, HeaderMap, HeaderValue, USER_AGENT},
    redirect,
};

use crate::config::Config;
use crate::error::{Result, RudolfError};
use crate::puzzle::{PuzzleInput, PuzzleKey};

use super::PuzzleSource;
use super::cookie;

const MAX_REDIRECTS: usize = 10;

/// HTTP client for the puzzle input endpoint.
pub struct AocClient {
    client: Client,
    base_url: String,
}

impl AocClient {
    /// Create a client, reading the session cookie from the configured jar.
    pub fn new(config: &Config) -> Result<Self> {
        let cookie = cookie::load_cookie_header(&config.cookie_jar)?;
        Self::with_cookie(config, cookie.as_deref())
    }

    /// Create a client with an explicit `Cookie` header value.
    pub fn with_cookie(config: &Config, cookie: Option<&str>) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            RudolfError::InvalidInput(format!("base URL {:?}: {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| RudolfError::InvalidInput(format!("user agent: {}", e)))?,
        );
        if let Some(cookie) = cookie {
            let mut value = HeaderValue::from_str(cookie)
                .map_err(|e| RudolfError::InvalidInput(format!("cookie jar: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the input resource for `key`.
    pub fn input_url(&self, key: PuzzleKey) -> String {
        format!("{}/{}/day/{}/input", self.base_url, key.year, key.day)
    }

    /// Download the puzzle input for `key`.
    pub async fn get_input(&self, key: PuzzleKey) -> Result<PuzzleInput> {
        let url = self.input_url(key);
        tracing::debug!(%url, "requesting puzzle input");

        let response = self.client.get(&url).send().await?;
        let response = check_response(response).await?;
        let body = response.bytes().await?;

        tracing::debug!(%key, bytes = body.len(), "received puzzle input");
        Ok(PuzzleInput::new(body.to_vec()))
    }
}

impl PuzzleSource for AocClient {
    async fn fetch(&self, key: PuzzleKey) -> Result<PuzzleInput> {
        self.get_input(key).await
    }
}

/// Only 200 counts as success; anything else surfaces the status and body.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(RudolfError::RemoteRejected {
                status: status.as_u16(),
                body: body.trim().to_string(),
            })
        }
    }
}
