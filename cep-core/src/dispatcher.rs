use std::io::Write;
use std::time::Duration;

use futures::future::join_all;

use crate::error::CoreResult;
use crate::presenter::{BANNER, render_outcome};
use crate::provider_factory::ProviderRegistry;
use crate::race::{RaceOutcome, race};

/// Start one race per code, all at once, and collect outcomes in input order.
///
/// Each race has its own deadline, measured from this call. With no codes a
/// single race with no providers runs, so the caller still sees `TimedOut`.
pub async fn lookup_all(
    registry: &ProviderRegistry,
    ceps: &[String],
    timeout: Duration,
) -> Vec<(String, RaceOutcome)> {
    if ceps.is_empty() {
        return vec![(String::new(), race(&[], "", timeout).await)];
    }
    let races = ceps.iter().map(|cep| async move {
        let outcome = race(registry.providers(), cep, timeout).await;
        (cep.clone(), outcome)
    });
    join_all(races).await
}

/// Print the banner, race every code and print each outcome.
///
/// Stops at the first failed race and returns its error; nothing is printed
/// for that race.
pub async fn run<W: Write>(
    registry: &ProviderRegistry,
    ceps: &[String],
    timeout: Duration,
    out: &mut W,
) -> CoreResult<()> {
    writeln!(out, "{BANNER}")?;
    out.flush()?;

    for (cep, outcome) in lookup_all(registry, ceps, timeout).await {
        match outcome {
            RaceOutcome::Failed { error, .. } => {
                tracing::debug!(cep.code = %cep, "stopping after failed race");
                return Err(error);
            }
            other => {
                if let Some(text) = render_outcome(&other) {
                    writeln!(out, "{text}")?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
