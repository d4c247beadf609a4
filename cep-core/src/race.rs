//! First-response-wins race between providers.
//!
//! Every provider lookup runs as its own task in a [`JoinSet`]. The first task
//! to finish decides the outcome, whether it succeeded or failed; if nothing
//! finishes before the deadline the race times out. Whatever is still running
//! at that point is aborted, which drops the in-flight HTTP request.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::Instrument;

use crate::error::CepError;
use crate::model::Lookup;
use crate::provider::CepProvider;
use crate::telemetry;

#[derive(Debug)]
pub enum RaceOutcome {
    Resolved(Lookup),
    Failed { provider: String, error: CepError },
    TimedOut,
}

impl RaceOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            RaceOutcome::Resolved(_) => "resolved",
            RaceOutcome::Failed { .. } => "failed",
            RaceOutcome::TimedOut => "timed_out",
        }
    }
}

/// Race all `providers` for `cep`, bounded by `timeout` from the moment of the call.
///
/// With no providers only the timer can fire, so the outcome is `TimedOut`.
pub async fn race(
    providers: &[Arc<dyn CepProvider>],
    cep: &str,
    timeout: Duration,
) -> RaceOutcome {
    let span = telemetry::race_span(cep);
    let outcome = first_event(providers, cep, timeout)
        .instrument(span.clone())
        .await;
    telemetry::record_outcome(&span, &outcome);
    outcome
}

async fn first_event(
    providers: &[Arc<dyn CepProvider>],
    cep: &str,
    timeout: Duration,
) -> RaceOutcome {
    let mut set = JoinSet::new();
    let mut names = HashMap::new();
    for provider in providers {
        let provider = Arc::clone(provider);
        let name = provider.name().to_string();
        let cep = cep.to_string();
        let handle = set.spawn(async move { provider.lookup(&cep).await }.in_current_span());
        names.insert(handle.id(), name);
    }

    let first = async {
        match set.join_next_with_id().await {
            Some(joined) => joined,
            // nothing was started; wait for the timer
            None => std::future::pending().await,
        }
    };

    let outcome = match tokio::time::timeout(timeout, first).await {
        Err(_elapsed) => RaceOutcome::TimedOut,
        Ok(Ok((_, Ok(lookup)))) => RaceOutcome::Resolved(lookup),
        Ok(Ok((id, Err(error)))) => RaceOutcome::Failed {
            provider: names.remove(&id).unwrap_or_default(),
            error,
        },
        Ok(Err(join_err)) => RaceOutcome::Failed {
            provider: names.remove(&join_err.id()).unwrap_or_default(),
            error: CepError::Other(anyhow::anyhow!("lookup task failed: {join_err}")),
        },
    };

    if !set.is_empty() {
        tracing::debug!(losers = set.len(), "aborting unfinished lookups");
        set.abort_all();
    }
    if let RaceOutcome::Failed { provider, error } = &outcome {
        tracing::warn!(cep.provider = %provider, error.kind = error.kind(), "lookup failed: {error}");
    }
    outcome
}
