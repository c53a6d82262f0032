use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::{error, success};
use std::io::{self, Write};
use std::path::Path;

/// Handle the `login` command: exchange credentials for a token and
/// persist it as the session credential.
pub fn handle(user: &str, password: Option<&str>, cfg: &Config, dir: &Path) -> AppResult<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => prompt_password()?,
    };

    let client = ApiClient::new(&cfg.server, None)?;

    match client.login(user, &password) {
        Ok(resp) => {
            let session = Session {
                token: resp.token,
                role: resp.role,
            };
            session.save(dir)?;
            success(format!("Logged in as {} ({})", user, session.role));
            Ok(())
        }
        Err(AppError::Api(msg)) => {
            // The CLI stand-in for the frontend's blocking alert.
            if msg.is_empty() {
                error("Login fehlgeschlagen!");
            } else {
                error(format!("Login fehlgeschlagen: {msg}"));
            }
            Err(AppError::LoginFailed)
        }
        Err(e) => Err(e),
    }
}

fn prompt_password() -> AppResult<String> {
    print!("Password: ");
    io::stdout().flush().ok();

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
