use crate::errors::AppResult;
use crate::models::ColorCheck;
use csv::Writer;
use std::path::Path;

/// Write the color checks to a CSV file.
pub fn write_csv(path: &Path, checks: &[ColorCheck]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "pantone",
        "hex_color",
        "status",
        "points",
        "alternative_hex",
        "created_at",
        "user",
    ])?;

    for c in checks {
        wtr.write_record(&[
            c.id.to_string(),
            c.pantone.clone(),
            c.hex_color.clone().unwrap_or_default(),
            c.status.clone(),
            c.points_joined(),
            c.alt_hex_text().to_string(),
            c.created_at.clone().unwrap_or_default(),
            c.user.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
