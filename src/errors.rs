//! Unified application error type.
//! All modules (api, cli, core, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Network / wire format
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Backend-reported
    // ---------------------------
    /// Carries the server's `error` field verbatim (may be empty when the
    /// server gave none).
    #[error("{0}")]
    Api(String),

    #[error("request was not accepted by the server")]
    RequestRejected,

    #[error("login failed")]
    LoginFailed,

    // ---------------------------
    // Session
    // ---------------------------
    #[error("not logged in. Run `pantonecheck login` first")]
    NotLoggedIn,

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
