use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProviderCfg {
    /// Scheme and host of the lookup service, without a trailing slash.
    pub base_url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_viacep() -> ProviderCfg {
    ProviderCfg {
        base_url: crate::providers::viacep::DEFAULT_BASE.into(),
        enabled: true,
    }
}
fn default_apicep() -> ProviderCfg {
    ProviderCfg {
        base_url: crate::providers::apicep::DEFAULT_BASE.into(),
        enabled: true,
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Providers {
    #[serde(default = "default_viacep")]
    pub viacep: ProviderCfg,
    #[serde(default = "default_apicep")]
    pub apicep: ProviderCfg,
}

impl Default for Providers {
    fn default() -> Self {
        Self {
            viacep: default_viacep(),
            apicep: default_apicep(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RaceCfg {
    /// Deadline for each race, measured from dispatch (default 1000ms)
    #[serde(default = "default_race_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RaceCfg {
    fn default() -> Self {
        Self {
            timeout_ms: default_race_timeout_ms(),
        }
    }
}

impl RaceCfg {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_race_timeout_ms() -> u64 {
    1_000
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HttpCfg {
    /// TCP connect timeout in milliseconds (default 5000ms)
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Total request timeout in milliseconds (default 60000ms)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Optional per-host idle connection pool cap (None = reqwest default)
    #[serde(default)]
    pub pool_max_idle_per_host: Option<usize>,
}

impl Default for HttpCfg {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            pool_max_idle_per_host: None,
        }
    }
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}
fn default_request_timeout_ms() -> u64 {
    60_000
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub providers: Providers,
    #[serde(default)]
    pub race: RaceCfg,
    /// HTTP client configuration (timeouts, pooling). Missing → defaults.
    #[serde(default)]
    pub http: HttpCfg,
}

impl Config {
    /// Load a Config from a file path (JSON or TOML by extension). If the
    /// extension is missing or unrecognized, try JSON first, then TOML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> crate::error::CoreResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(crate::error::CepError::from)?;
        let s =
            std::str::from_utf8(&bytes).map_err(|e| crate::error::CepError::Other(e.into()))?;
        let cfg: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str::<Self>(s)
                .map_err(|e| crate::error::CepError::Other(e.into()))?,
            Some("toml") => {
                toml::from_str::<Self>(s).map_err(|e| crate::error::CepError::Other(e.into()))?
            }
            _ => serde_json::from_str::<Self>(s)
                .map_err(|e| crate::error::CepError::Other(e.into()))
                .or_else(|_| {
                    toml::from_str::<Self>(s)
                        .map_err(|e| crate::error::CepError::Other(e.into()))
                })?,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> crate::error::CoreResult<()> {
        for (name, p) in [("viacep", &self.providers.viacep), ("apicep", &self.providers.apicep)] {
            if !(p.base_url.starts_with("http://") || p.base_url.starts_with("https://")) {
                return Err(crate::error::CepError::Validation(format!(
                    "providers.{name}.base_url must be an http(s) URL, got '{}'",
                    p.base_url
                )));
            }
        }
        Ok(())
    }
}
