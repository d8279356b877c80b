//! Command-line front end.
//!
//! Each command reads the configuration, opens the storage handle and runs
//! the idempotent initialization before doing its work, so a fresh install
//! needs no separate setup step.

pub mod init;
pub mod login;
pub mod migrations;
pub mod register;
pub mod student;

use crate::db::db::Storage;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create or upgrade the database and write the default configuration")]
    Init(init::InitArgs),
    #[command(about = "Verify account credentials")]
    Login(login::LoginArgs),
    #[command(about = "Create a user account")]
    Register(register::RegisterArgs),
    #[command(about = "Manage student records", arg_required_else_help = true)]
    Student(student::StudentArgs),
    #[command(about = "Inspect database schema migrations", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Register(args) => register::cmd(args),
            Commands::Student(args) => student::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Opens the configured storage and brings it up to date.
pub(crate) fn open_storage() -> Result<Storage> {
    let config = Config::read()?;
    let storage = Storage::from_config(&config)?;
    storage.initialize()?;
    Ok(storage)
}
