use clap::Args;

use super::ServiceArgs;

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    service: ServiceArgs,
}

pub(crate) async fn run(args: ListArgs) -> Result<(), String> {
    let context = args.service.build_context().await?;

    let pending = context
        .registrations
        .list_pending()
        .await
        .map_err(|error| format!("failed to list pending registrations: {error}"))?;

    if pending.is_empty() {
        println!("no pending registrations");

        return Ok(());
    }

    for registration in pending {
        println!(
            "{}  {}  {}  {}",
            registration.uuid, registration.created_at, registration.email, registration.name
        );
    }

    Ok(())
}
