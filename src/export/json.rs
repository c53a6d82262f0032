use crate::errors::AppResult;
use crate::models::ColorCheck;
use std::path::Path;

/// Write the color checks as pretty-printed JSON.
pub fn write_json(path: &Path, checks: &[ColorCheck]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(checks)?;
    std::fs::write(path, json)?;
    Ok(())
}
