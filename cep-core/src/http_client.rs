use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::HttpCfg;
use crate::error::{CepError, CoreResult};

/// Thin wrapper around reqwest::Client with defaults and helpers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new_default() -> CoreResult<Self> {
        Self::from_cfg(&HttpCfg::default())
    }

    pub fn from_cfg(cfg: &HttpCfg) -> CoreResult<Self> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_millis(cfg.connect_timeout_ms))
            .timeout(Duration::from_millis(cfg.request_timeout_ms));
        if let Some(n) = cfg.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(n);
        }
        let inner = builder
            .build()
            .map_err(|e| CepError::Other(anyhow::anyhow!("http client build failed: {e}")))?;
        Ok(Self {
            inner,
            user_agent: concat!("cep/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }

    /// GET `url` and decode the JSON body into `R`.
    ///
    /// The body is decoded whatever the status: lookup services answer unknown
    /// codes with a JSON error record. A non-2xx body that is not valid JSON
    /// becomes `Upstream`. Returns the decoded body and the elapsed time in
    /// milliseconds. Errors are tagged with `provider`.
    pub async fn get_json<R: DeserializeOwned>(
        &self,
        provider: &str,
        url: &str,
    ) -> CoreResult<(R, u32)> {
        let start = Instant::now();
        let resp = self
            .inner
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CepError::Transport {
                provider: provider.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(cep.provider = %provider, http.status = status.as_u16(), "non-success status");
        }

        let body = resp.bytes().await.map_err(|e| CepError::BodyRead {
            provider: provider.to_string(),
            message: e.to_string(),
        })?;
        let latency = start.elapsed().as_millis() as u32;

        let parsed = serde_json::from_slice::<R>(&body).map_err(|e| {
            if status.is_success() {
                CepError::Decode {
                    provider: provider.to_string(),
                    message: format!("json decode error: {e}"),
                }
            } else {
                map_http_error(provider, status, &String::from_utf8_lossy(&body))
            }
        })?;
        Ok((parsed, latency))
    }
}

fn map_http_error(provider: &str, status: StatusCode, body: &str) -> CepError {
    CepError::Upstream {
        provider: provider.to_string(),
        code: status.as_u16().to_string(),
        message: truncate(body, 300),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() > max {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        let mut t = s[..end].to_string();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
