//! Credential gate and retrying HTTP adapter for the upstream provider.

use crate::config::{Config, mask_credential};
use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, env_vars, retry};
use crate::data_fetcher::models::JsonMap;
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Adapter over the upstream cricket API with safe fallbacks.
///
/// The enable/disable decision is made exactly once at construction, from
/// the configured credential, and is immutable for the adapter's lifetime.
/// Construct one `CricketApi` at application start and pass it by reference
/// to whatever consumes it; there is no hidden global instance.
///
/// All shared state is read-only after construction (client, base URL,
/// headers, gate flag), so concurrent calls need no locking.
pub struct CricketApi {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    enabled: bool,
}

impl CricketApi {
    /// Builds the adapter from configuration.
    ///
    /// With a credential present, auth headers are derived once and the
    /// masked key is logged. Without one, the adapter is permanently
    /// disabled and a warning is logged here - exactly once, not per call.
    ///
    /// # Errors
    /// Only construction problems (a malformed credential that cannot be a
    /// header value, an HTTP client build failure) surface as errors;
    /// credential absence is NOT an error.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;

        let enabled = config.has_credential();
        let mut headers = HeaderMap::new();

        if enabled {
            let key = config.api_key.as_deref().unwrap_or_default();
            headers.insert(
                "X-RapidAPI-Key",
                HeaderValue::from_str(key).map_err(|_| {
                    AppError::config_error("API key contains characters not valid in a header")
                })?,
            );
            headers.insert(
                "X-RapidAPI-Host",
                HeaderValue::from_str(host_header(&config.api_host)).map_err(|_| {
                    AppError::config_error("API host contains characters not valid in a header")
                })?,
            );
            info!("API key loaded (masked): {}", mask_credential(key));
        } else {
            warn!(
                "{} not set. API calls are disabled and will return empty results.",
                env_vars::API_KEY
            );
        }

        Ok(CricketApi {
            client,
            base_url: config.api_host.trim_end_matches('/').to_string(),
            headers,
            enabled,
        })
    }

    /// Whether the credential gate passed at construction.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Performs an authenticated GET against a relative endpoint path.
    ///
    /// Callers always receive a mapping: an object body is returned as-is
    /// and any other JSON body is wrapped under a `data` key. Every failure
    /// mode - gate disabled, exhausted retries, non-retryable status,
    /// unparseable body - degrades to an empty mapping. This function never
    /// returns an error for upstream failures; the only side effects are
    /// logging and the GET requests themselves, which are safe to retry.
    #[instrument(skip(self, params))]
    pub async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> JsonMap {
        if !self.enabled {
            return JsonMap::new();
        }

        match self.try_fetch(endpoint, params).await {
            Ok(value) => wrap_as_map(value),
            Err(e) => {
                warn!("No data for {endpoint}: {e}");
                JsonMap::new()
            }
        }
    }

    /// The fallible fetch underneath [`fetch`](Self::fetch), with the retry
    /// loop. Retries are narrow on purpose: HTTP 429 backs off 2^attempt
    /// seconds, network-level errors wait 1 second, and any other non-200
    /// status fails the call immediately. The attempt budget is shared
    /// across failure classes.
    async fn try_fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut attempt = 0u32;

        loop {
            info!(
                "GET {} (attempt {}/{})",
                endpoint,
                attempt + 1,
                retry::MAX_ATTEMPTS
            );

            let mut request = self.client.get(&url).headers(self.headers.clone());
            if !params.is_empty() {
                request = request.query(params);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    debug!("Response status for {endpoint}: {status}");

                    if status.is_success() {
                        let body = response.text().await?;
                        return match serde_json::from_str::<Value>(&body) {
                            Ok(value) => Ok(value),
                            Err(e) => {
                                error!("Failed to parse response from {endpoint}: {e}");
                                Err(AppError::ApiParse(e))
                            }
                        };
                    }

                    if status.as_u16() == 429 && attempt + 1 < retry::MAX_ATTEMPTS {
                        let wait = retry::rate_limit_backoff(attempt);
                        warn!(
                            "Rate limited on {}. Backing off {:?} (attempt {}/{})",
                            endpoint,
                            wait,
                            attempt + 1,
                            retry::MAX_ATTEMPTS
                        );
                        tokio::time::sleep(wait).await;
                        attempt += 1;
                        continue;
                    }

                    let status_code = status.as_u16();
                    let reason = status.canonical_reason().unwrap_or("Unknown error");
                    let body = response.text().await.unwrap_or_default();
                    let preview: String = body.chars().take(200).collect();
                    error!("{endpoint} failed {status_code}: {preview}");

                    return Err(match status_code {
                        404 => AppError::api_not_found(&url),
                        429 => AppError::api_rate_limit(reason, &url),
                        400..=499 => AppError::api_client_error(status_code, reason, &url),
                        _ => AppError::api_server_error(status_code, reason, &url),
                    });
                }
                Err(e) => {
                    if attempt + 1 < retry::MAX_ATTEMPTS {
                        warn!(
                            "Request error for {}: {}. Retrying in {:?} (attempt {}/{})",
                            endpoint,
                            e,
                            retry::NETWORK_ERROR_DELAY,
                            attempt + 1,
                            retry::MAX_ATTEMPTS
                        );
                        tokio::time::sleep(retry::NETWORK_ERROR_DELAY).await;
                        attempt += 1;
                        continue;
                    }

                    error!("Request failed for URL {url}: {e}");
                    return Err(if e.is_timeout() {
                        AppError::network_timeout(&url)
                    } else if e.is_connect() {
                        AppError::network_connection(&url, e.to_string())
                    } else {
                        AppError::ApiFetch(e)
                    });
                }
            }
        }
    }
}

/// Callers always get a mapping: objects pass through, anything else is
/// wrapped under `data`.
fn wrap_as_map(value: Value) -> JsonMap {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = JsonMap::new();
            map.insert("data".to_string(), other);
            map
        }
    }
}

/// The `X-RapidAPI-Host` header wants the bare host, not a URL.
fn host_header(api_host: &str) -> &str {
    api_host
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
}
