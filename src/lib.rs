use anyhow::Result;

pub mod cli;
pub mod commands;
pub mod services;
pub mod settings;

use cli::Commands;
use settings::{FileSettingsStore, JsonFileSettingsStore, SettingsStore};

pub struct AppCtx {
    pub settings_store: Box<dyn SettingsStore>,
}

#[cfg(not(tarpaulin_include))]
pub async fn run(cli: cli::Cli) -> Result<()> {
    let settings_store: Box<dyn SettingsStore> = match cli.settings {
        Some(path) => Box::new(JsonFileSettingsStore::new(path.into())),
        None => Box::new(FileSettingsStore::new()?),
    };
    let ctx = AppCtx { settings_store };

    match cli.command {
        Commands::Generate(args) => commands::generate::handle(args, &ctx).await,
        Commands::Config(args) => commands::config::handle(args, &ctx).await,
    }
}
