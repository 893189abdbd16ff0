pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evnotify")]
#[command(author, version, about = "EVNotify CLI - account, settings, and sync against the EVNotify backend")]
pub struct Cli {
    /// Path to config file (checked in order: local config.toml, ~/.config/evnotify/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch an available account key from the backend and store it
    Getkey,

    /// Register a new account and store its credentials
    Register {
        /// Account key to register under (see `getkey`)
        akey: String,

        /// Account password
        password: String,
    },

    /// Log in to an existing account and store its credentials
    Login {
        /// Account key
        akey: String,

        /// Account password
        password: String,
    },

    /// Change the account password
    ChangePassword {
        /// Current password
        old_password: String,

        /// New password
        new_password: String,
    },

    /// Request a fresh session token
    RenewToken {
        /// Account password
        password: String,
    },

    /// Read or write the account settings object
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Pull or push the synced settings/stats payload
    Sync {
        #[command(subcommand)]
        command: SyncCommands,
    },

    /// Trigger a notification for this account
    Notify {
        /// Cancel a pending notification instead of triggering one
        #[arg(long)]
        abort: bool,
    },

    /// Show configuration, stored credentials, and backend reachability
    Status,

    /// Delete the stored credentials
    Logout,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Fetch the stored settings object
    Get {
        /// Account password
        password: String,
    },

    /// Store a settings object
    Set {
        /// Account password
        password: String,

        /// Settings as a JSON object, e.g. '{"telemetry":true}'
        json: String,
    },
}

#[derive(Subcommand)]
pub enum SyncCommands {
    /// Pull the synced payload from the backend
    Pull,

    /// Push a payload to the backend
    Push {
        /// Payload as a JSON object, e.g. '{"soc":55}'
        json: String,
    },
}
