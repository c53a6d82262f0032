use crate::errors::AppResult;
use crate::session::Session;
use std::path::Path;

/// Handle the `status` command: report the local session state.
/// Purely local, never talks to the backend.
pub fn handle(dir: &Path) -> AppResult<()> {
    match Session::load(dir)? {
        Some(session) => {
            println!("Logged in  (role: {})", session.role);
            println!("Token: {}", mask(&session.token));
        }
        None => {
            println!("Not logged in. Run `pantonecheck login` to sign in.");
        }
    }
    Ok(())
}

fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}
