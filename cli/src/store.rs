//! Stored credentials for the CLI.
//!
//! The core client never touches disk; persisting the session between runs
//! is this application's job.

use std::fs;
use std::path::PathBuf;

use evnotify_core::Session;

const DATA_DIR: &str = ".evnotify";
const CREDENTIALS_FILE: &str = "credentials.json";

/// Get data directory path (~/.evnotify), creating it if needed
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    let data_dir = home.join(DATA_DIR);

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }

    Ok(data_dir)
}

fn credentials_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join(CREDENTIALS_FILE))
}

/// Load the stored session, or an anonymous one when nothing is stored yet
pub fn load_session() -> anyhow::Result<Session> {
    let path = credentials_path()?;

    if !path.exists() {
        return Ok(Session::default());
    }

    let content = fs::read_to_string(&path)?;
    let session: Session = serde_json::from_str(&content)?;
    Ok(session)
}

/// Save the session to the credentials file
pub fn save_session(session: &Session) -> anyhow::Result<()> {
    let path = credentials_path()?;
    let content = serde_json::to_string_pretty(session)?;
    fs::write(&path, content)?;
    tracing::debug!("Credentials saved to {:?}", path);
    Ok(())
}

/// Delete the stored credentials, if any
pub fn clear_session() -> anyhow::Result<()> {
    let path = credentials_path()?;

    if path.exists() {
        fs::remove_file(&path)?;
    }

    Ok(())
}
