use crate::api::ApiClient;
use crate::config::Config;
use crate::core::list_view;
use crate::core::request::{ColorRequest, failure_message, normalize_alt_hex, success_message};
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use std::path::Path;

/// Handle the `request` command: submit a color request, then re-fetch
/// the list so the new record is visible immediately.
pub fn handle(
    pantone: &str,
    points: &[String],
    alt_hex: Option<&str>,
    cfg: &Config,
    dir: &Path,
) -> AppResult<()> {
    let session = Session::require(dir)?;
    let client = ApiClient::new(&cfg.server, Some(&session.token))?;

    let alt = match alt_hex {
        Some(h) => Some(normalize_alt_hex(h)?),
        None => None,
    };
    let req = ColorRequest::new(pantone.to_string(), points.to_vec(), alt);

    match client.request_check(&req) {
        Ok(accepted) => {
            println!("{}", success_message(accepted.id));
            refresh_list(&client, cfg);
            Ok(())
        }
        Err(AppError::Api(msg)) => {
            println!("{}", failure_message(&msg));
            Err(AppError::RequestRejected)
        }
        Err(e) => Err(e),
    }
}

/// Re-fetch after a successful submit. A failed refresh only logs: the
/// submit already succeeded and must not be reported as an error.
fn refresh_list(client: &ApiClient, cfg: &Config) {
    match client.list_checks() {
        Ok(checks) => {
            print!("{}", list_view::render_table(&checks, cfg));
            println!("{}", list_view::count_line(checks.len()));
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to refresh color checks after request");
        }
    }
}
