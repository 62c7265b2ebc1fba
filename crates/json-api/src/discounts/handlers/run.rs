//! Run Discounts Handler

use std::sync::Arc;

use salvo::prelude::*;

use pallet::carts::RunInput;

use crate::{extensions::*, state::State};

/// Run Discounts Handler
///
/// Evaluates the wholesale pricing policy against a cart snapshot and returns
/// the price update operations to apply.
#[endpoint(
    tags("discounts"),
    summary = "Run Discounts",
    responses(
        (status_code = StatusCode::OK, description = "Evaluation result"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed cart payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let input = req.parse_json::<RunInput>().await.map_err(|error| {
        StatusError::bad_request().brief(format!("invalid cart payload: {error}"))
    })?;

    res.render(Json(state.policy.run(&input)));

    Ok(())
}
