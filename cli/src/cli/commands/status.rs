use std::path::PathBuf;

use crate::config::{default_config_path, load_config};
use crate::store;

pub async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path.clone())?;
    let session = store::load_session()?;

    println!("EVNotify CLI Status");
    println!("===================");
    println!();
    println!("Configuration:");
    println!("  Config file: {:?}", default_config_path());
    println!("  Backend: {}", config.base_url);
    println!("  Timeout: {}s", config.timeout_secs);
    println!();
    println!("Credentials:");
    match (&session.akey, session.is_authenticated()) {
        (Some(akey), true) => {
            println!("  Account key: {}", akey);
            println!("  State: authenticated");
        }
        (Some(akey), false) => {
            println!("  Account key: {}", akey);
            println!("  State: key only, not logged in");
        }
        (None, _) => {
            println!("  State: anonymous");
        }
    }

    // Reachability probe against the bare base endpoint; any completed
    // exchange counts, whatever the backend answers there.
    println!();
    let client = super::client(config_path)?;
    match client.send_raw("", None).await {
        Ok(res) => {
            println!("Backend: REACHABLE (status {})", res.status);
        }
        Err(e) => {
            println!("Backend: NOT REACHABLE ({})", e);
        }
    }

    Ok(())
}
