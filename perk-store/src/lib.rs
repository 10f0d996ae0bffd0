pub mod app_config;
pub mod offer_repo;

pub use offer_repo::InMemoryOfferRepository;
