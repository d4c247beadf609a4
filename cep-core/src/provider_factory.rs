use std::sync::Arc;

use crate::config::Config;
use crate::error::CoreResult;
use crate::http_client::HttpClient;
use crate::provider::CepProvider;
use crate::providers::{apicep::ApiCep, viacep::ViaCep};

/// Providers taking part in every race, in registration order.
/// Names correspond to config keys ("viacep", "apicep").
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn CepProvider>>,
}

impl ProviderRegistry {
    /// Build a registry from configuration. Disabled providers are skipped.
    pub fn from_config(cfg: &Config) -> CoreResult<Self> {
        let http = HttpClient::from_cfg(&cfg.http)?;
        let mut reg = Self::default();

        if cfg.providers.viacep.enabled {
            reg.register(Arc::new(ViaCep::new(
                http.clone(),
                cfg.providers.viacep.base_url.clone(),
            )));
        }
        if cfg.providers.apicep.enabled {
            reg.register(Arc::new(ApiCep::new(
                http,
                cfg.providers.apicep.base_url.clone(),
            )));
        }
        Ok(reg)
    }

    pub fn register(&mut self, provider: Arc<dyn CepProvider>) {
        self.providers.push(provider);
    }

    /// Get a provider by name (e.g., "viacep").
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<Arc<dyn CepProvider>> {
        self.providers.iter().find(|p| p.name() == name).cloned()
    }

    pub fn providers(&self) -> &[Arc<dyn CepProvider>] {
        &self.providers
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}
