pub mod account;
pub mod notify;
pub mod settings;
pub mod status;
pub mod sync;

use std::path::PathBuf;
use std::time::Duration;

use evnotify_core::{AccountClient, ClientOptions};

use crate::config::load_config;
use crate::store;

/// Build a client from the config file and the stored credentials.
pub(crate) fn client(config_path: Option<PathBuf>) -> anyhow::Result<AccountClient> {
    let config = load_config(config_path)?;
    let session = store::load_session()?;

    let client = AccountClient::with_options(ClientOptions {
        base_url: config.base_url,
        timeout: Duration::from_secs(config.timeout_secs),
        session,
    })?;

    Ok(client)
}
