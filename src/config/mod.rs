use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::AppResult;

pub const CONFIG_FILE: &str = "pantonecheck.conf";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the PantoneChecker backend.
    pub server: String,
    #[serde(default = "default_swatch_width")]
    pub swatch_width: usize,
    #[serde(default = "default_show_created")]
    pub show_created: bool,
}

fn default_server() -> String {
    "http://localhost:8080".to_string()
}
fn default_swatch_width() -> usize {
    3
}
fn default_show_created() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            swatch_width: default_swatch_width(),
            show_created: default_show_created(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn default_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pantonecheck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pantonecheck")
        }
    }

    /// Full path of the config file inside `dir`.
    pub fn config_file(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load(dir: &Path) -> AppResult<Self> {
        let path = Self::config_file(dir);
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the config directory and write the configuration file.
    pub fn init_all(dir: &Path, server: Option<String>) -> AppResult<()> {
        fs::create_dir_all(dir)?;

        let config = Config {
            server: server.unwrap_or_else(default_server),
            ..Config::default()
        };

        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(Self::config_file(dir))?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {:?}", Self::config_file(dir));

        Ok(())
    }
}
