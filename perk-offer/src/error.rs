#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OfferError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Offer not found: {0}")]
    NotFound(String),
}

pub type OfferResult<T> = Result<T, OfferError>;
