//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`StorageError`] - Cookie and localStorage persistence errors
//! - [`FetchError`] - Network errors for catalog requests

use std::fmt;

/// Persistence errors for cookie and localStorage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Browser storage (document.cookie or localStorage) not available.
    Unavailable,
    /// Failed to serialize or write a value.
    SaveFailed,
    /// Failed to remove a value.
    RemoveFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "browser storage not available"),
            Self::SaveFailed => write!(f, "failed to save to browser storage"),
            Self::RemoveFailed => write!(f, "failed to remove from browser storage"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Network errors for catalog requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request failed before a response arrived (timeout, CORS, offline).
    Network(String),
    /// HTTP error response (non-2xx status).
    Http(u16),
    /// Response body could not be decoded.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {}", msg),
            Self::Http(status) => write!(f, "HTTP error: {}", status),
            Self::Decode(msg) => write!(f, "failed to decode response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
