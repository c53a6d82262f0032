//! Builds the color-check table from fetched records.
//!
//! Pure data-to-text: the command layer fetches, this module renders, the
//! command layer prints. Keeping the render step side-effect free makes the
//! fetch → state → render ordering explicit and testable.

use crate::config::Config;
use crate::models::ColorCheck;
use crate::utils::colors::{RESET, color_for_status, swatch};
use crate::utils::table::Table;

/// Render one table row per record, preserving server-provided order.
pub fn render_table(checks: &[ColorCheck], cfg: &Config) -> String {
    let mut headers = vec!["ID", "PANTONE", "COLOR", "STATUS", "POINTS", "ALT"];
    if cfg.show_created {
        headers.push("CREATED");
    }
    let mut table = Table::new(headers);

    for c in checks {
        let status = format!("{}{}{}", color_for_status(&c.status), c.status, RESET);
        let mut row = vec![
            c.id.to_string(),
            c.pantone.clone(),
            swatch(c.swatch_hex(), cfg.swatch_width),
            status,
            c.points_joined(),
            c.alt_hex_text().to_string(),
        ];
        if cfg.show_created {
            row.push(c.created_short());
        }
        table.add_row(row);
    }

    table.render()
}

/// Footer line below the table.
pub fn count_line(n: usize) -> String {
    match n {
        1 => "1 color check".to_string(),
        n => format!("{n} color checks"),
    }
}
