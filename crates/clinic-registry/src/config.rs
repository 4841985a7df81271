//! Configuration for the Appointment Registry

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// How appointment ids are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// SHA-256 over (patient, doctor, time). Deterministic.
    #[default]
    ContentHash,
    /// Random UUID v4.
    Random,
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "content-hash" | "hash" | "sha256" => Ok(Self::ContentHash),
            "random" | "uuid" => Ok(Self::Random),
            other => Err(ConfigError::InvalidValue {
                key: "CLINIC_ID_STRATEGY",
                value: other.to_string(),
            }),
        }
    }
}

/// How doctor and patient names are folded before comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityNormalization {
    /// Names compare byte-for-byte.
    #[default]
    Exact,
    /// Surrounding whitespace trimmed, inner whitespace collapsed, lowercased.
    TrimCaseFold,
}

impl FromStr for IdentityNormalization {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "trim-case-fold" | "casefold" => Ok(Self::TrimCaseFold),
            other => Err(ConfigError::InvalidValue {
                key: "CLINIC_IDENTITY_NORMALIZATION",
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable held an unrecognized value.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Offending value
        value: String,
    },
}

/// Registry configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Appointment id generation strategy
    pub id_strategy: IdStrategy,
    /// Name folding applied to doctor and patient identities
    pub identity_normalization: IdentityNormalization,
    /// Store doctor identities as SHA-256 digests instead of plain names
    pub hash_doctor_identities: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::ContentHash,
            identity_normalization: IdentityNormalization::Exact,
            hash_doctor_identities: true,
        }
    }
}

impl RegistryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CLINIC_ID_STRATEGY`: `content-hash` | `random` (default: content-hash)
    /// - `CLINIC_IDENTITY_NORMALIZATION`: `exact` | `trim-case-fold` (default: exact)
    /// - `CLINIC_HASH_DOCTOR_IDENTITIES`: bool (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let id_strategy = match lookup("CLINIC_ID_STRATEGY") {
            Some(v) => v.parse()?,
            None => defaults.id_strategy,
        };

        let identity_normalization = match lookup("CLINIC_IDENTITY_NORMALIZATION") {
            Some(v) => v.parse()?,
            None => defaults.identity_normalization,
        };

        let hash_doctor_identities = match lookup("CLINIC_HASH_DOCTOR_IDENTITIES") {
            Some(v) => parse_bool("CLINIC_HASH_DOCTOR_IDENTITIES", &v)?,
            None => defaults.hash_doctor_identities,
        };

        Ok(Self {
            id_strategy,
            identity_normalization,
            hash_doctor_identities,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            value: other.to_string(),
        }),
    }
}
