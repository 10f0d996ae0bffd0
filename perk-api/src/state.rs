use std::sync::Arc;
use perk_offer::OfferRepository;
use perk_store::InMemoryOfferRepository;

#[derive(Clone)]
pub struct AppState {
    pub offer_repo: Arc<dyn OfferRepository>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self {
            offer_repo: Arc::new(InMemoryOfferRepository::new()),
        }
    }
}
