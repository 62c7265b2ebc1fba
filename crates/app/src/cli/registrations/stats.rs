use clap::Args;

use super::ServiceArgs;

#[derive(Debug, Args)]
pub(crate) struct StatsArgs {
    #[command(flatten)]
    service: ServiceArgs,
}

pub(crate) async fn run(args: StatsArgs) -> Result<(), String> {
    let context = args.service.build_context().await?;

    let stats = context
        .registrations
        .stats()
        .await
        .map_err(|error| format!("failed to load registration stats: {error}"))?;

    println!("total: {}", stats.total);
    println!("pending: {}", stats.pending);
    println!("approved: {}", stats.approved);
    println!("rejected: {}", stats.rejected);

    Ok(())
}
