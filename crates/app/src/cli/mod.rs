use clap::{Parser, Subcommand};

mod db;
mod registrations;

#[derive(Debug, Parser)]
#[command(name = "pallet-app", about = "Pallet CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Registrations(registrations::RegistrationsCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Registrations(command) => registrations::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
