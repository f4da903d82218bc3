//! Error type definitions.
//!
//! This module defines all error types and failure categories used throughout
//! the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for loading the JSON settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The settings file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON of the expected shape.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A setting parsed but holds an unusable value.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Dotted settings key
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// A single failed request attempt below the HTTP status level.
///
/// Non-2xx responses are not transport errors; they are counted as failed
/// attempts without one.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] ReqwestError),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] ReqwestError),

    /// Any other client-side request failure.
    #[error("request failed: {0}")]
    Request(#[source] ReqwestError),

    /// The response body was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failure reported by a non-reqwest transport.
    #[error("{0}")]
    Other(String),
}

impl From<ReqwestError> for TransportError {
    fn from(error: ReqwestError) -> Self {
        if error.is_timeout() {
            TransportError::Timeout(error)
        } else if error.is_connect() {
            TransportError::Connect(error)
        } else {
            TransportError::Request(error)
        }
    }
}

/// Errors surfaced by "get normalized record for domain".
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input normalizes to an empty canonical domain. Not retryable.
    #[error("Invalid domain: {0:?}")]
    InvalidDomain(String),

    /// Remote mode was requested without an API key.
    #[error("API key not found in environment variable {env_var}")]
    CredentialUnavailable {
        /// Environment variable that was expected to hold the key
        env_var: String,
    },

    /// Every attempt against the provider failed.
    #[error(
        "Failed to retrieve data for {domain} after {attempts} attempt(s){}",
        status_suffix(.last_status)
    )]
    FetchFailed {
        /// Canonical domain that was requested
        domain: String,
        /// Attempts made
        attempts: usize,
        /// Status of the last non-2xx response, if any
        last_status: Option<u16>,
        /// Last transport-level error, if any attempt produced one
        source: Option<TransportError>,
    },
}

/// Failure categories counted per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureType {
    InvalidDomain,
    CredentialUnavailable,
    RequestTimeout,
    ConnectError,
    RequestError,
    DecodeError,
    HttpStatusError,
    OtherFetchError,
}

impl std::fmt::Display for FailureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::InvalidDomain => "Invalid domain",
            FailureType::CredentialUnavailable => "Credential unavailable",
            FailureType::RequestTimeout => "Request timeout",
            FailureType::ConnectError => "Connection error",
            FailureType::RequestError => "Request error",
            FailureType::DecodeError => "Invalid JSON response",
            FailureType::HttpStatusError => "Non-success HTTP status",
            FailureType::OtherFetchError => "Other fetch error",
        }
    }
}

/// Which source produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    MockProfile,
    RemotePayload,
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::MockProfile => "Records from mock profiles",
            InfoType::RemotePayload => "Records from provider API",
        }
    }
}

fn status_suffix(last_status: &Option<u16>) -> String {
    match last_status {
        Some(status) => format!(", last status {status}"),
        None => String::new(),
    }
}
