use serde::{Deserialize, Serialize};

/// Fallback swatch color when the server has not assigned one yet.
pub const FALLBACK_HEX: &str = "#fff";

/// A color-check record as returned by the backend.
///
/// Read-only from the client's perspective: every state change happens
/// server-side and is only observed via re-fetch. Field names follow the
/// backend's JSON wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorCheck {
    pub id: i64,                         // ⇔ server-assigned identifier
    pub pantone: String,                 // ⇔ requested color code, e.g. "186C"
    pub hex_color: Option<String>,       // ⇔ display color, nullable
    pub alternative_hex: Option<String>, // ⇔ alternate display color, nullable
    /// Opaque status label (the server enumerates pending/approved/rejected,
    /// the client only passes it through).
    pub status: String,
    #[serde(default)]
    pub points: Vec<String>, // ⇔ named inspection points
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>, // ISO8601
    #[serde(default)]
    pub user: Option<String>, // owning username (admin listings)
}

impl ColorCheck {
    /// Hex color to use for the rendered swatch, `#fff` when unset.
    pub fn swatch_hex(&self) -> &str {
        match &self.hex_color {
            Some(h) if !h.trim().is_empty() => h,
            _ => FALLBACK_HEX,
        }
    }

    /// Inspection points joined for display.
    pub fn points_joined(&self) -> String {
        self.points.join(", ")
    }

    /// Alternate hex as display text, empty when unset.
    pub fn alt_hex_text(&self) -> &str {
        self.alternative_hex.as_deref().unwrap_or("")
    }

    /// `created_at` shortened to "YYYY-MM-DD HH:MM" when it parses as
    /// ISO8601, the raw text otherwise.
    pub fn created_short(&self) -> String {
        match &self.created_at {
            None => String::new(),
            Some(raw) => match chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
                Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
                Err(_) => raw.clone(),
            },
        }
    }
}
