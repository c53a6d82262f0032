use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pantonecheck
/// CLI client for the PantoneChecker color-check backend
#[derive(Parser)]
#[command(
    name = "pantonecheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "A color-check CLI client: list Pantone checks and submit new color requests",
    long_about = None
)]
pub struct Cli {
    /// Override the backend server URL (useful for tests or staging)
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Override the config/session directory (used by tests)
    #[arg(global = true, long = "config-dir", hide = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in and store the session token
    Login {
        /// Username
        #[arg(long = "user")]
        user: String,

        /// Password (prompted interactively when omitted)
        #[arg(long = "password")]
        password: Option<String>,
    },

    /// Delete the stored session token
    Logout,

    /// Show whether a session is stored, and the stored role
    Status,

    /// List color checks from the backend
    List {
        /// Print the raw records as JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },

    /// Submit a new color-check request
    Request {
        /// Pantone color code, e.g. "186 C"
        #[arg(long = "pantone")]
        pantone: String,

        /// Inspection point (repeatable), e.g. "Testliner weiß Coated"
        #[arg(long = "point", value_name = "POINT")]
        points: Vec<String>,

        /// Alternate hex color to suggest (e.g. "#cc0000")
        #[arg(long = "alt-hex", value_name = "HEX")]
        alt_hex: Option<String>,
    },

    /// Export the color-check list to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// User management (admin only)
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List all users with their roles and tokens
    List,

    /// Create a new user
    Add {
        /// Username
        #[arg(long = "user")]
        user: String,

        /// Password
        #[arg(long = "password")]
        password: String,

        /// Role (user or admin)
        #[arg(long = "role", default_value = "user")]
        role: String,
    },
}
