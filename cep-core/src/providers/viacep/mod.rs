use async_trait::async_trait;

use crate::error::CoreResult;
use crate::http_client::HttpClient;
use crate::model::{Address, Lookup, ViaCepRecord};
use crate::provider::CepProvider;

pub const DEFAULT_BASE: &str = "https://viacep.com.br";

#[derive(Debug, Clone)]
pub struct ViaCep {
    http: HttpClient,
    base: String,
    name: String, // "viacep"
}

impl ViaCep {
    pub fn new(http: HttpClient, base: String) -> Self {
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            name: "viacep".into(),
        }
    }

    #[cfg(test)]
    pub fn new_for_tests(server_base: &str) -> Self {
        ViaCep::new(HttpClient::new_default().unwrap(), server_base.to_string())
    }
}

#[async_trait]
impl CepProvider for ViaCep {
    fn name(&self) -> &str {
        &self.name
    }

    fn url_for(&self, cep: &str) -> String {
        format!("{}/ws/{cep}/json/", self.base)
    }

    async fn lookup(&self, cep: &str) -> CoreResult<Lookup> {
        let url = self.url_for(cep);
        tracing::debug!(cep.provider = %self.name, http.url = %url, "requesting address");
        let (record, latency_ms) = self.http.get_json::<ViaCepRecord>(&self.name, &url).await?;
        Ok(Lookup {
            provider: self.name.clone(),
            url,
            address: Address::ViaCep(record),
            latency_ms,
        })
    }
}
