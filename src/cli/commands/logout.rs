use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `logout` command: delete the stored credential.
/// Unconditional; no confirmation, no server-side call.
pub fn handle(dir: &Path) -> AppResult<()> {
    if Session::clear(dir)? {
        success("Session cleared. Run `pantonecheck login` to sign in again.");
    } else {
        info("No stored session.");
    }
    Ok(())
}
