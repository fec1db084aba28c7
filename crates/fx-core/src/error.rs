use thiserror::Error;

/// Problems found while building an [`EngineConfig`](crate::EngineConfig).
///
/// Engine operations themselves never fail; only configuration does, and the
/// frontend answers these by falling back to the defaults.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for config key `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("config key `{key}` out of range: {reason}")]
    OutOfRange { key: &'static str, reason: &'static str },
}
