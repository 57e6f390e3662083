// src/config.rs
use crate::errors::{ClientError, Result};
use crate::origin::Origin;

/// Environment variable naming the execution service origin.
pub const ORIGIN_VAR: &str = "CMDRELAY_ORIGIN";

/// Default service address, matching the port the execution service binds
/// when started without arguments.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:3030";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub origin: Origin,
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to the
    /// default local service address when `CMDRELAY_ORIGIN` is unset.
    pub fn from_env() -> Result<Self> {
        let origin = std::env::var(ORIGIN_VAR).unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        if origin.trim().is_empty() {
            return Err(ClientError::Config(format!("{} is set but empty", ORIGIN_VAR)));
        }
        Ok(Self {
            origin: Origin::new(origin),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_reads_origin_variable() {
        temp_env::with_var(ORIGIN_VAR, Some("http://10.0.0.5:3030/"), || {
            let config = ClientConfig::from_env().unwrap();
            assert_eq!(config.origin.as_str(), "http://10.0.0.5:3030");
        });
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        temp_env::with_var_unset(ORIGIN_VAR, || {
            let config = ClientConfig::from_env().unwrap();
            assert_eq!(config.origin.as_str(), DEFAULT_ORIGIN);
        });
    }

    #[test]
    fn test_from_env_rejects_empty_origin() {
        temp_env::with_var(ORIGIN_VAR, Some("  "), || {
            let err = ClientConfig::from_env().unwrap_err();
            assert!(matches!(err, ClientError::Config(_)));
        });
    }
}
