use async_trait::async_trait;
use crate::error::OfferResult;
use crate::models::{Offer, Transaction};

/// Repository trait for offer and enablement state
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Insert or wholesale-replace an offer under its id
    async fn put_offer(&self, offer: Offer) -> OfferResult<()>;

    async fn get_offer(&self, id: &str) -> OfferResult<Offer>;

    /// Snapshot of every offer, enablement flags included
    async fn list_offers(&self) -> Vec<Offer>;

    async fn enable_offer(&self, offer_id: &str, user_id: &str) -> OfferResult<()>;

    async fn disable_offer(&self, offer_id: &str, user_id: &str) -> OfferResult<()>;

    async fn is_enabled_for(&self, offer_id: &str, user_id: &str) -> OfferResult<bool>;

    /// Best applicable offer for the transaction, `None` when nothing applies
    async fn best_offer_for(&self, transaction: &Transaction) -> Option<Offer>;
}
