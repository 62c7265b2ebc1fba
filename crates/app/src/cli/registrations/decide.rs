use clap::Args;
use pallet_app::domain::registrations::models::RegistrationUuid;
use uuid::Uuid;

use super::ServiceArgs;

#[derive(Debug, Args)]
pub(crate) struct DecideArgs {
    #[command(flatten)]
    service: ServiceArgs,

    /// UUID of the registration to decide
    #[arg(long)]
    registration_uuid: Uuid,

    /// Decision to apply: approve or reject
    #[arg(long)]
    action: String,
}

pub(crate) async fn run(args: DecideArgs) -> Result<(), String> {
    let context = args.service.build_context().await?;
    let registration = RegistrationUuid::from_uuid(args.registration_uuid);

    let decided = match args.action.as_str() {
        "approve" => context.registrations.approve(registration).await,
        "reject" => context.registrations.reject(registration).await,
        other => return Err(format!("unknown action `{other}` (expected approve or reject)")),
    }
    .map_err(|error| format!("failed to decide registration: {error}"))?;

    println!("registration_uuid: {}", decided.uuid);
    println!("status: {}", decided.status.as_str());
    println!("applicant_email: {}", decided.email);

    Ok(())
}
