use std::path::PathBuf;

pub async fn run(config: Option<PathBuf>, abort: bool) -> anyhow::Result<()> {
    let client = super::client(config)?;

    match client.send_notification(abort).await? {
        Some(true) if abort => println!("Pending notification aborted."),
        Some(true) => println!("Notification triggered."),
        Some(false) => println!("Backend declined the notification."),
        None => println!("Backend returned no notification state."),
    }

    Ok(())
}
