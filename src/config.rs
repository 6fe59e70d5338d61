//! Runtime configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! The simulated latencies stand in for a real account API and a real chat
//! backend. The server reads them from the environment at startup and
//! provides them to the component tree through context. The browser bundle
//! has no environment, so it uses the values present when it was compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 2000;
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
}

/// Delays used by the simulated collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupConfig {
    /// How long the simulated account creation takes.
    pub submit_latency: Duration,
    /// How long the support bot waits before replying.
    pub reply_delay: Duration,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            submit_latency: Duration::from_millis(DEFAULT_SUBMIT_LATENCY_MS),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
        }
    }
}

impl SignupConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SIGNUP_SUBMIT_LATENCY_MS`: default 2000
    /// - `CHAT_REPLY_DELAY_MS`: default 1000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but is not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Config baked in at compile time, for builds without a runtime environment.
    ///
    /// Invalid values are logged and replaced by the defaults.
    #[must_use]
    pub fn compiled() -> Self {
        Self::from_lookup_or_default(|key| {
            match key {
                "SIGNUP_SUBMIT_LATENCY_MS" => option_env!("SIGNUP_SUBMIT_LATENCY_MS"),
                "CHAT_REPLY_DELAY_MS" => option_env!("CHAT_REPLY_DELAY_MS"),
                _ => None,
            }
            .map(str::to_owned)
        })
    }

    /// Like [`SignupConfig::from_lookup`], but logs an invalid value and
    /// returns the defaults instead of failing.
    #[must_use]
    pub fn from_lookup_or_default<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "signup config invalid; using defaults");
            Self::default()
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`SignupConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let submit_ms = parse_or("SIGNUP_SUBMIT_LATENCY_MS", lookup("SIGNUP_SUBMIT_LATENCY_MS"), DEFAULT_SUBMIT_LATENCY_MS)?;
        let reply_ms = parse_or("CHAT_REPLY_DELAY_MS", lookup("CHAT_REPLY_DELAY_MS"), DEFAULT_REPLY_DELAY_MS)?;
        Ok(Self { submit_latency: Duration::from_millis(submit_ms), reply_delay: Duration::from_millis(reply_ms) })
    }
}

/// Settings for the SSR server binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read `PORT` (default 3000).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build server config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self { port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)? })
    }
}

fn parse_or<T>(var: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { var: var.to_owned(), value }),
    }
}
