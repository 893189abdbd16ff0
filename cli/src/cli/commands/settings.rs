use std::path::PathBuf;

use serde_json::Value;

pub async fn get(config: Option<PathBuf>, password: String) -> anyhow::Result<()> {
    let client = super::client(config)?;

    match client.get_settings(&password).await? {
        Some(settings) => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        None => {
            println!("No settings stored for this account.");
        }
    }

    Ok(())
}

pub async fn set(config: Option<PathBuf>, password: String, json: String) -> anyhow::Result<()> {
    let settings: Value = serde_json::from_str(&json)
        .map_err(|e| anyhow::anyhow!("Settings must be valid JSON: {}", e))?;

    let client = super::client(config)?;

    client.set_settings(&password, &settings).await?;
    println!("Settings submitted.");

    Ok(())
}
