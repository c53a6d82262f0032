use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the server URL
pub fn handle(dir: &Path, server: Option<String>) -> AppResult<()> {
    println!("⚙️  Initializing pantonecheck…");

    Config::init_all(dir, server)?;

    let cfg = Config::load(dir)?;
    println!("🌐 Server: {}", cfg.server);
    println!("🎉 pantonecheck initialization completed!");
    println!("   Next step: pantonecheck login --user <name>");
    Ok(())
}
