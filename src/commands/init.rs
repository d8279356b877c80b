//! First-run setup: writes the configuration file and prepares the database.

use crate::{
    db::db::Storage,
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Keep an existing configuration file untouched
    #[arg(short, long)]
    keep_config: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = Config::read()?;
    if !init_args.keep_config {
        config.save()?;
        msg_success!(Message::ConfigSaved);
    }

    let storage = Storage::from_config(&config)?;
    storage.initialize()?;

    msg_success!(Message::DatabaseInitialized(storage.path().display().to_string()));
    Ok(())
}
