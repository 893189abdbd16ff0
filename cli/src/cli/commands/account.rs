use std::path::PathBuf;

use crate::store;

pub async fn getkey(config: Option<PathBuf>) -> anyhow::Result<()> {
    let mut client = super::client(config)?;

    match client.retrieve_key().await? {
        Some(akey) => {
            store::save_session(client.session())?;
            println!("Account key: {}", akey);
            println!("Register it with: evnotify register {} <password>", akey);
        }
        None => {
            anyhow::bail!("Backend returned no account key");
        }
    }

    Ok(())
}

pub async fn register(
    config: Option<PathBuf>,
    akey: String,
    password: String,
) -> anyhow::Result<()> {
    let mut client = super::client(config)?;

    match client.register(&akey, &password).await? {
        Some(_) => {
            store::save_session(client.session())?;
            println!("Account {} registered and logged in.", akey);
        }
        None => {
            anyhow::bail!("Registration rejected by backend (key already taken?)");
        }
    }

    Ok(())
}

pub async fn login(config: Option<PathBuf>, akey: String, password: String) -> anyhow::Result<()> {
    let mut client = super::client(config)?;

    match client.login(&akey, &password).await? {
        Some(_) => {
            store::save_session(client.session())?;
            println!("Logged in as {}.", akey);
        }
        None => {
            anyhow::bail!("Login rejected by backend (wrong key or password?)");
        }
    }

    Ok(())
}

pub async fn change_password(
    config: Option<PathBuf>,
    old_password: String,
    new_password: String,
) -> anyhow::Result<()> {
    let client = super::client(config)?;

    client.change_password(&old_password, &new_password).await?;
    println!("Password change submitted.");

    Ok(())
}

pub async fn renew_token(config: Option<PathBuf>, password: String) -> anyhow::Result<()> {
    let mut client = super::client(config)?;

    let token = client.renew_token(&password).await?;
    store::save_session(client.session())?;
    println!("Session token: {}", token);

    Ok(())
}

pub fn logout() -> anyhow::Result<()> {
    store::clear_session()?;
    println!("Stored credentials deleted.");

    Ok(())
}
