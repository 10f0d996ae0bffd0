use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use perk_offer::{NewOffer, Offer};
use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnablementResponse {
    pub offer_id: String,
    pub user_id: String,
    pub enabled: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create-offer", post(create_offer))
        .route("/offers", get(list_offers))
        .route("/offers/{offer_id}", get(get_offer))
        .route("/enable/{offer_id}/{user_id}", post(enable_offer))
        .route("/disable/{offer_id}/{user_id}", post(disable_offer))
}

/// POST /create-offer
/// Create an offer, replacing any existing offer with the same id
#[tracing::instrument(skip(state, payload))]
pub async fn create_offer(
    State(state): State<AppState>,
    payload: Result<Json<NewOffer>, JsonRejection>,
) -> Result<(StatusCode, Json<Offer>), AppError> {
    let Json(req) = payload
        .map_err(|e| AppError::ValidationError(format!("Invalid offer data: {}", e.body_text())))?;

    let offer = req.into_offer()?;
    state.offer_repo.put_offer(offer.clone()).await?;
    tracing::info!(offer_id = %offer.id, "Offer created");

    Ok((StatusCode::CREATED, Json(offer)))
}

/// GET /offers
pub async fn list_offers(State(state): State<AppState>) -> Json<Vec<Offer>> {
    Json(state.offer_repo.list_offers().await)
}

/// GET /offers/{offer_id}
pub async fn get_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
) -> Result<Json<Offer>, AppError> {
    Ok(Json(state.offer_repo.get_offer(&offer_id).await?))
}

/// POST /enable/{offer_id}/{user_id}
#[tracing::instrument(skip(state))]
pub async fn enable_offer(
    State(state): State<AppState>,
    Path((offer_id, user_id)): Path<(String, String)>,
) -> Result<Json<EnablementResponse>, AppError> {
    state.offer_repo.enable_offer(&offer_id, &user_id).await?;
    Ok(Json(EnablementResponse { offer_id, user_id, enabled: true }))
}

/// POST /disable/{offer_id}/{user_id}
#[tracing::instrument(skip(state))]
pub async fn disable_offer(
    State(state): State<AppState>,
    Path((offer_id, user_id)): Path<(String, String)>,
) -> Result<Json<EnablementResponse>, AppError> {
    state.offer_repo.disable_offer(&offer_id, &user_id).await?;
    Ok(Json(EnablementResponse { offer_id, user_id, enabled: false }))
}
