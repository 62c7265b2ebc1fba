use clap::Args;
use pallet_app::database;
use sqlx::raw_sql;

const SCHEMA_SQL: &str = include_str!("../../domain/registrations/sql/schema.sql");

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: InitArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    // The schema is idempotent, so reruns against an initialized database
    // are safe.
    raw_sql(SCHEMA_SQL)
        .execute(&pool)
        .await
        .map_err(|error| format!("failed to apply schema: {error}"))?;

    println!("applied registrations schema");

    Ok(())
}
