use std::time::Duration;

use reqwest::{header, Client as ReqwestClient, Response, StatusCode};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::{ClientConfig, ConfigError};
use crate::error::{parse_error_objects, Error};
use crate::jsonapi::Document;

use super::rate_limit::{parse_retry_after, RateLimiter};
use super::route::Route;

/// Wait before the single 429 retry when the response carries no
/// `Retry-After` header.
const RETRY_AFTER_FALLBACK: Duration = Duration::from_secs(1);

/// HTTP transport shared by every request of one client.
///
/// Owns the pooled `reqwest::Client`, injects the bearer token, and keeps
/// the rate budget up to date from the headers of every response.
pub(crate) struct Transport {
    http: ReqwestClient,
    base_url: String,
    rate: RateLimiter,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        // Scrub the token from logs
        let api_key_scrubbed = if config.api_key.len() > 8 {
            format!("{}...[REDACTED]", &config.api_key[..8])
        } else {
            "[REDACTED]".to_string()
        };
        info!(
            "initializing BattleMetrics client: base_url={}, timeout={}s, api_key={}",
            config.base_url, config.timeout_secs, api_key_scrubbed
        );

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ConfigError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = ReqwestClient::builder()
            .pool_max_idle_per_host(10)
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate: RateLimiter::new(),
        })
    }

    /// Issue a request and parse the JSON:API document envelope.
    pub async fn request_document(
        &self,
        route: Route,
        body: Option<Value>,
    ) -> Result<Document, Error> {
        let payload = self.send(&route, body.as_ref()).await?;
        Document::parse(&payload)
    }

    /// Issue a request, discarding any response body.
    pub async fn request_empty(&self, route: Route, body: Option<Value>) -> Result<(), Error> {
        self.send(&route, body.as_ref()).await.map(|_| ())
    }

    /// Send one request, gated by the rate budget, retrying a 429 at most
    /// once. Returns the raw response body on success.
    async fn send(&self, route: &Route, body: Option<&Value>) -> Result<String, Error> {
        let mut retried = false;

        loop {
            self.rate.acquire().await;

            let url = route.url(&self.base_url);
            let mut request = self.http.request(route.method.clone(), &url);
            if !route.query_pairs().is_empty() {
                request = request.query(route.query_pairs());
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await?;
            self.rate.record_headers(response.headers()).await;

            let status = response.status();
            debug!("{} {} returned {}", route.method, route.path(), status);

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = parse_retry_after(response.headers());
                let body_text = response.text().await.unwrap_or_default();

                if retried {
                    warn!("{} still rate limited after one retry", route.path());
                    return Err(Error::RateLimit {
                        retry_after,
                        errors: parse_error_objects(&body_text),
                    });
                }

                let wait = retry_after.unwrap_or(RETRY_AFTER_FALLBACK);
                self.rate.record_retry_after(wait).await;
                warn!(
                    "rate limited on {}, retrying once in {:?}",
                    route.path(),
                    wait
                );
                sleep(wait).await;
                retried = true;
                continue;
            }

            if !status.is_success() {
                return Err(error_response(route, status, response).await);
            }

            return Ok(response.text().await?);
        }
    }
}

async fn error_response(route: &Route, status: StatusCode, response: Response) -> Error {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_string());

    match status {
        StatusCode::UNAUTHORIZED => {
            warn!("{} returned 401, the API token may be invalid", route.path());
        }
        StatusCode::FORBIDDEN => {
            warn!("{} returned 403, check the token's permissions", route.path());
        }
        StatusCode::NOT_FOUND => {
            warn!("{} returned 404, check whether the path is correct", route.path());
        }
        _ => {
            warn!("API error ({}) on {}: {}", status, route.path(), body);
        }
    }

    Error::from_status(status, &body)
}
