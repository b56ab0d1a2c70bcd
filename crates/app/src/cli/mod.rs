use clap::{Parser, Subcommand};

mod db;
mod report;

#[derive(Debug, Parser)]
#[command(name = "kasir-app", about = "Kasir admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Report(report::ReportCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Report(command) => report::run(command).await,
        }
    }
}
