//! Color request body and the user-facing confirmation messages.
//!
//! The confirmation texts keep the German wording of the PantoneChecker
//! frontend so the CLI reads the same as the web UI.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::errors::{AppError, AppResult};

/// `POST /colorchecks/request` body: `{pantone, points[, alternative_hex]}`.
///
/// Deliberately unvalidated: an empty pantone or point list is forwarded
/// as-is and the server's verdict is displayed verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ColorRequest {
    pub pantone: String,
    pub points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_hex: Option<String>,
}

impl ColorRequest {
    pub fn new(pantone: String, points: Vec<String>, alternative_hex: Option<String>) -> Self {
        Self {
            pantone,
            points,
            alternative_hex,
        }
    }
}

/// Normalize a user-supplied alternate hex color to `#rrggbb`.
/// The one client-side check we keep: a terminal has no color picker.
pub fn normalize_alt_hex(input: &str) -> AppResult<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").unwrap());

    let trimmed = input.trim();
    match re.captures(trimmed) {
        Some(caps) => {
            let digits = caps[1].to_lowercase();
            let full = if digits.len() == 3 {
                digits.chars().flat_map(|c| [c, c]).collect::<String>()
            } else {
                digits
            };
            Ok(format!("#{full}"))
        }
        None => Err(AppError::InvalidHexColor(input.to_string())),
    }
}

/// Confirmation shown when the backend accepted the request.
pub fn success_message(id: i64) -> String {
    format!("Farbe angefragt! ID: {id}")
}

/// Inline message shown when the backend rejected the request.
pub fn failure_message(error: &str) -> String {
    format!("Fehler: {error}")
}
