use clap::{Args, Subcommand};

mod sales;

#[derive(Debug, Args)]
pub(crate) struct ReportCommand {
    #[command(subcommand)]
    command: ReportSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReportSubcommand {
    /// Print revenue, transaction count and best seller for a date range
    Sales(sales::SalesArgs),
}

pub(crate) async fn run(command: ReportCommand) -> Result<(), String> {
    match command.command {
        ReportSubcommand::Sales(args) => sales::run(args).await,
    }
}
