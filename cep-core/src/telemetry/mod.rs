//! Tracing helpers shared by the race and provider clients.
//! Nothing is printed unless the embedding binary installs a subscriber.

pub mod keys;
#[cfg(test)]
pub mod test_span;

pub use keys::*;

use tracing::{Span, field};

/// Span covering one race for `cep`. Outcome fields are filled by [`record_outcome`].
pub fn race_span(cep: &str) -> Span {
    tracing::info_span!(
        "cep.race",
        cep.code = %cep,
        race.outcome = field::Empty,
        cep.provider = field::Empty,
        latency.ms = field::Empty,
        error.kind = field::Empty,
        error.message = field::Empty,
    )
}

pub(crate) fn record_outcome(span: &Span, outcome: &crate::race::RaceOutcome) {
    use crate::race::RaceOutcome;

    span.record(KEY_OUTCOME, outcome.label());
    match outcome {
        RaceOutcome::Resolved(lookup) => {
            span.record(KEY_PROVIDER, lookup.provider.as_str());
            span.record(KEY_LATENCY_MS, lookup.latency_ms as u64);
        }
        RaceOutcome::Failed { provider, error } => {
            span.record(KEY_PROVIDER, provider.as_str());
            span.record(KEY_ERROR_KIND, error.kind());
            span.record(KEY_ERROR_MESSAGE, field::display(error));
        }
        RaceOutcome::TimedOut => {}
    }
}
