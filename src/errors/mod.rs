use thiserror::Error;

/// Reasons an upstream row is rejected at the input boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("missing required field {0}")]
    MissingField(&'static str),
    #[error("invalid period number {0}")]
    InvalidPeriod(i64),
    #[error("invalid event type code {0}")]
    InvalidEventType(i64),
    #[error("malformed row: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("weights sum to {0:.4}, expected 1.0")]
    WeightSum(f64),
    #[error("weight `{name}` must be a non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
}

/// Add context to cache errors
pub fn cache_context(operation: &str, key: &str) -> String {
    format!("Failed to {} cache for key: {}", operation, key)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
