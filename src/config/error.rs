//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No GeoNames username was configured.
    #[error("no GeoNames username configured: set GEORESOLVE_USERNAME or pass --username")]
    MissingUsername,

    /// Base URL is not an http(s) endpoint.
    #[error("invalid gazetteer base URL '{value}': expected an http(s) endpoint")]
    InvalidBaseUrl { value: String },

    /// The fallback bias country is empty.
    #[error("default bias country must not be empty")]
    MissingDefaultCountry,

    /// Timeout string could not be parsed as a number of seconds.
    #[error("failed to parse timeout '{value}': {source}")]
    TimeoutParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Timeout value is outside the valid range.
    #[error("invalid timeout '{value}': must be at least 1 second")]
    InvalidTimeout { value: String },

    /// Concurrency limit must allow at least one worker.
    #[error("max concurrency must be at least 1")]
    InvalidConcurrency,
}
