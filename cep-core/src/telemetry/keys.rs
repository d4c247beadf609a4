/// Span/Log attribute keys for lookups and races.
/// Keep these stable; changing them is a breaking change for log queries.
pub const KEY_PROVIDER: &str = "cep.provider";
pub const KEY_CEP: &str = "cep.code";

pub const KEY_OUTCOME: &str = "race.outcome";
pub const KEY_LATENCY_MS: &str = "latency.ms";

/// Error-related (if applicable)
pub const KEY_ERROR_KIND: &str = "error.kind";
pub const KEY_ERROR_MESSAGE: &str = "error.message";
