use clap::Args;
use kasir_app::database::{self, DEFAULT_MAX_CONNECTIONS, MIGRATOR};

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, DEFAULT_MAX_CONNECTIONS)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("applied migrations ({} known)", MIGRATOR.iter().count());

    Ok(())
}
