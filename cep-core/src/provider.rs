use async_trait::async_trait;

use crate::error::CoreResult;
use crate::model::Lookup;

/// A postal code lookup service.
#[async_trait]
pub trait CepProvider: Send + Sync {
    fn name(&self) -> &str;

    /// URL requested for `cep`, after any provider-specific reformatting.
    fn url_for(&self, cep: &str) -> String;

    async fn lookup(&self, cep: &str) -> CoreResult<Lookup>;
}
