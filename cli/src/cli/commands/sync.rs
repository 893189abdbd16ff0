use std::path::PathBuf;

use serde_json::Value;

pub async fn pull(config: Option<PathBuf>) -> anyhow::Result<()> {
    let client = super::client(config)?;

    match client.pull_settings().await? {
        Some(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        None => {
            println!("No sync data available.");
        }
    }

    Ok(())
}

pub async fn push(config: Option<PathBuf>, json: String) -> anyhow::Result<()> {
    let payload: Value = serde_json::from_str(&json)
        .map_err(|e| anyhow::anyhow!("Payload must be valid JSON: {}", e))?;

    let client = super::client(config)?;

    match client.push_settings(&payload).await? {
        Some(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        None => {
            println!("Push submitted, backend returned no sync result.");
        }
    }

    Ok(())
}
