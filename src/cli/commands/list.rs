use crate::api::ApiClient;
use crate::config::Config;
use crate::core::list_view;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::error;
use std::path::Path;

/// Handle the `list` command: session guard, one fetch, one render.
pub fn handle(json: bool, cfg: &Config, dir: &Path) -> AppResult<()> {
    let session = Session::require(dir)?;
    let client = ApiClient::new(&cfg.server, Some(&session.token))?;

    let checks = match client.list_checks() {
        Ok(checks) => checks,
        Err(e) => {
            // Degradation policy: nothing is rendered on a failed load,
            // the cause goes to the diagnostic channel.
            tracing::error!(error = %e, "failed to load color checks");
            error("Could not load color checks.");
            return Err(e);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    } else {
        print!("{}", list_view::render_table(&checks, cfg));
        println!("{}", list_view::count_line(checks.len()));
    }

    Ok(())
}
