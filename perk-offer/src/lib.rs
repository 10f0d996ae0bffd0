pub mod models;
pub mod error;
pub mod rules;
pub mod validation;
pub mod repository;

pub use models::{NewOffer, Offer, OfferApplication, RewardType, Transaction};
pub use error::{OfferError, OfferResult};
pub use rules::{is_applicable, select_best_offer};
pub use repository::OfferRepository;
