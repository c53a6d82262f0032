use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::session::Session;
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Handle the `export` command: fetch the current list and write it to a
/// file in the chosen format.
pub fn handle(
    format: &ExportFormat,
    file: &str,
    force: bool,
    cfg: &Config,
    dir: &Path,
) -> AppResult<()> {
    let session = Session::require(dir)?;
    let client = ApiClient::new(&cfg.server, Some(&session.token))?;

    let out_path = expand_tilde(file);
    export::ensure_writable(&out_path, force)?;

    let checks = client.list_checks()?;

    match format {
        ExportFormat::Csv => export::csv::write_csv(&out_path, &checks)?,
        ExportFormat::Json => export::json::write_json(&out_path, &checks)?,
    }

    export::notify_export_success(format.as_str(), &out_path);
    Ok(())
}
