use crate::api::ApiClient;
use crate::cli::parser::UsersAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::success;
use crate::utils::table::Table;
use std::path::Path;

/// Handle the `users` subcommands (admin only; the backend enforces the
/// role, the client just forwards the token).
pub fn handle(action: &UsersAction, cfg: &Config, dir: &Path) -> AppResult<()> {
    let session = Session::require(dir)?;
    let client = ApiClient::new(&cfg.server, Some(&session.token))?;

    match action {
        UsersAction::List => {
            let users = client.list_users()?;

            let mut table = Table::new(vec!["ID", "USERNAME", "ROLE", "TOKEN"]);
            for u in &users {
                table.add_row(vec![
                    u.id.to_string(),
                    u.username.clone(),
                    u.role.clone(),
                    u.api_token.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }
        UsersAction::Add {
            user,
            password,
            role,
        } => {
            let created = client.add_user(user, password, role)?;
            success(format!(
                "User '{}' created. Token: {}",
                created.username, created.api_token
            ));
        }
    }

    Ok(())
}
