//! Errors raised while loading castle definitions.

use thiserror::Error;

/// Failure to build a [`CastleConfig`](crate::CastleConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse castle definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid door range {min}..={max}: need 1 <= min <= max")]
    InvalidDoorRange { min: u32, max: u32 },
}
