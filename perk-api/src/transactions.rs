use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use perk_offer::{OfferApplication, Transaction};
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/create-transaction", post(create_transaction))
}

/// POST /create-transaction
/// Apply the best eligible offer to a purchase
#[tracing::instrument(skip(state, payload))]
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<Transaction>, JsonRejection>,
) -> Result<Json<OfferApplication>, AppError> {
    let Json(transaction) = payload
        .map_err(|e| AppError::ValidationError(format!("Invalid transaction data: {}", e.body_text())))?;
    transaction.validate()?;

    let Some(offer) = state.offer_repo.best_offer_for(&transaction).await else {
        tracing::debug!(txn_id = %transaction.txn_id, customer_id = %transaction.customer_id, "No applicable offer");
        return Err(AppError::NoApplicableOffer);
    };

    let application = OfferApplication::new(&transaction, offer);
    tracing::info!(
        txn_id = %application.txn_id,
        offer_id = %application.offer.id,
        outcome = application.offer.outcome,
        "Applied offer"
    );

    Ok(Json(application))
}
