use async_trait::async_trait;

use crate::error::CoreResult;
use crate::http_client::HttpClient;
use crate::model::{Address, ApiCepRecord, Lookup};
use crate::provider::CepProvider;

pub const DEFAULT_BASE: &str = "https://cdn.apicep.com";

/// ApiCEP keys its files by the hyphenated code. An 8-character code is
/// rewritten to `DDDDD-DDD`; anything else is assumed to be formatted already.
pub fn format_cep(cep: &str) -> String {
    if cep.chars().count() != 8 {
        return cep.to_string();
    }
    let mut chars = cep.chars();
    let first: String = chars.by_ref().take(5).collect();
    let last: String = chars.collect();
    format!("{first}-{last}")
}

#[derive(Debug, Clone)]
pub struct ApiCep {
    http: HttpClient,
    base: String,
    name: String, // "apicep"
}

impl ApiCep {
    pub fn new(http: HttpClient, base: String) -> Self {
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            name: "apicep".into(),
        }
    }

    #[cfg(test)]
    pub fn new_for_tests(server_base: &str) -> Self {
        ApiCep::new(HttpClient::new_default().unwrap(), server_base.to_string())
    }
}

#[async_trait]
impl CepProvider for ApiCep {
    fn name(&self) -> &str {
        &self.name
    }

    fn url_for(&self, cep: &str) -> String {
        format!("{}/file/apicep/{}.json", self.base, format_cep(cep))
    }

    async fn lookup(&self, cep: &str) -> CoreResult<Lookup> {
        let url = self.url_for(cep);
        tracing::debug!(cep.provider = %self.name, http.url = %url, "requesting address");
        let (record, latency_ms) = self.http.get_json::<ApiCepRecord>(&self.name, &url).await?;
        Ok(Lookup {
            provider: self.name.clone(),
            url,
            address: Address::ApiCep(record),
            latency_ms,
        })
    }
}
