//! Runtime configuration, loaded from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SUBSCRIPTION_INTERVAL_MS` | `1000` | Time between two fired carts |
//! | `ORDER_CHANNEL_CAPACITY` | `1` | Carts that may wait for the order handler |
//! | `SUBSCRIPTION_COMMAND_BUFFER` | `32` | Pending client requests to the subscription |
//! | `PAYMENT_ENDPOINT` | unset | URL charged with the ledger total by the demo |
//!
//! Numeric values must be positive; both capacities are capped at
//! [`MAX_CHANNEL_CAPACITY`].

use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;

/// Largest capacity a bounded tokio channel can be created with.
pub const MAX_CHANNEL_CAPACITY: usize = Semaphore::MAX_PERMITS;

/// Errors raised while reading the configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Settings shared by the subscription, the order channel and the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Time between two fired carts.
    pub interval: Duration,
    /// Capacity of the order channel. `1` makes the subscription wait for the
    /// handler on almost every tick.
    pub order_channel_capacity: usize,
    /// Capacity of the subscription's request channel.
    pub command_buffer: usize,
    pub payment_endpoint: Option<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            order_channel_capacity: 1,
            command_buffer: 32,
            payment_endpoint: None,
        }
    }
}

impl SystemConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let interval_ms = parse_positive(
            &lookup,
            "SUBSCRIPTION_INTERVAL_MS",
            defaults.interval.as_millis() as u64,
            u64::MAX,
        )?;
        let order_channel_capacity = parse_positive(
            &lookup,
            "ORDER_CHANNEL_CAPACITY",
            defaults.order_channel_capacity as u64,
            MAX_CHANNEL_CAPACITY as u64,
        )?;
        let command_buffer = parse_positive(
            &lookup,
            "SUBSCRIPTION_COMMAND_BUFFER",
            defaults.command_buffer as u64,
            MAX_CHANNEL_CAPACITY as u64,
        )?;
        let payment_endpoint = lookup("PAYMENT_ENDPOINT").filter(|s| !s.trim().is_empty());

        Ok(Self {
            interval: Duration::from_millis(interval_ms),
            order_channel_capacity: order_channel_capacity as usize,
            command_buffer: command_buffer as usize,
            payment_endpoint,
        })
    }
}

/// Reads `key` as an integer in `1..=max`, falling back to `default` when unset.
fn parse_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
    max: u64,
) -> Result<u64, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    match value.trim().parse::<u64>() {
        Ok(parsed) if (1..=max).contains(&parsed) => Ok(parsed),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SystemConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("SUBSCRIPTION_INTERVAL_MS", "250"),
            ("ORDER_CHANNEL_CAPACITY", "4"),
            ("SUBSCRIPTION_COMMAND_BUFFER", "8"),
            ("PAYMENT_ENDPOINT", "http://localhost:9000/pay"),
        ]))
        .unwrap();

        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.order_channel_capacity, 4);
        assert_eq!(config.command_buffer, 8);
        assert_eq!(
            config.payment_endpoint.as_deref(),
            Some("http://localhost:9000/pay")
        );
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        for value in ["0", "-5", "soon"] {
            let err = SystemConfig::from_lookup(lookup(&[("SUBSCRIPTION_INTERVAL_MS", value)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    key: "SUBSCRIPTION_INTERVAL_MS".to_string(),
                    value: value.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_rejects_capacity_above_channel_limit() {
        let too_large = (MAX_CHANNEL_CAPACITY as u64 + 1).to_string();
        for key in ["ORDER_CHANNEL_CAPACITY", "SUBSCRIPTION_COMMAND_BUFFER"] {
            let err = SystemConfig::from_lookup(lookup(&[(key, too_large.as_str())])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: too_large.clone(),
                }
            );
        }

        let max = MAX_CHANNEL_CAPACITY.to_string();
        let config =
            SystemConfig::from_lookup(lookup(&[("ORDER_CHANNEL_CAPACITY", max.as_str())])).unwrap();
        assert_eq!(config.order_channel_capacity, MAX_CHANNEL_CAPACITY);
    }

    #[test]
    fn test_blank_payment_endpoint_is_unset() {
        let config = SystemConfig::from_lookup(lookup(&[("PAYMENT_ENDPOINT", "  ")])).unwrap();
        assert!(config.payment_endpoint.is_none());
    }
}
