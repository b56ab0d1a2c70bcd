//! Get Transaction Handler

use std::sync::Arc;

use salvo::prelude::*;

use kasir_app::domain::transactions::models::Transaction;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
    transactions::{errors::into_api_error, models::TransactionResponse},
};

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<TransactionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = req.id_param::<Transaction>("id")?;

    let transaction = state
        .app
        .transactions
        .get_transaction(id)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Transaction fetched successfully",
        transaction.into(),
    ))
}
