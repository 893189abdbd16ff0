use clap::Parser;

mod cli;
mod config;
mod store;

use cli::{Cli, Commands, SettingsCommands, SyncCommands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("evnotify_cli=info".parse()?)
                .add_directive("evnotify_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Getkey => {
            cli::commands::account::getkey(cli.config).await?;
        }
        Commands::Register { akey, password } => {
            cli::commands::account::register(cli.config, akey, password).await?;
        }
        Commands::Login { akey, password } => {
            cli::commands::account::login(cli.config, akey, password).await?;
        }
        Commands::ChangePassword {
            old_password,
            new_password,
        } => {
            cli::commands::account::change_password(cli.config, old_password, new_password)
                .await?;
        }
        Commands::RenewToken { password } => {
            cli::commands::account::renew_token(cli.config, password).await?;
        }
        Commands::Settings { command } => match command {
            SettingsCommands::Get { password } => {
                cli::commands::settings::get(cli.config, password).await?;
            }
            SettingsCommands::Set { password, json } => {
                cli::commands::settings::set(cli.config, password, json).await?;
            }
        },
        Commands::Sync { command } => match command {
            SyncCommands::Pull => {
                cli::commands::sync::pull(cli.config).await?;
            }
            SyncCommands::Push { json } => {
                cli::commands::sync::push(cli.config, json).await?;
            }
        },
        Commands::Notify { abort } => {
            cli::commands::notify::run(cli.config, abort).await?;
        }
        Commands::Status => {
            cli::commands::status::run(cli.config).await?;
        }
        Commands::Logout => {
            cli::commands::account::logout()?;
        }
    }

    Ok(())
}
