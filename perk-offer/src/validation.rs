//! Boundary checks applied before payloads reach the offer store.

use std::collections::HashMap;
use crate::error::{OfferError, OfferResult};
use crate::models::{NewOffer, Offer, Transaction};

fn require_non_empty(field: &str, value: &str) -> OfferResult<()> {
    if value.trim().is_empty() {
        return Err(OfferError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i64) -> OfferResult<()> {
    if value < 0 {
        return Err(OfferError::Validation(format!("{} must not be negative, got {}", field, value)));
    }
    Ok(())
}

impl NewOffer {
    /// Validate the payload and turn it into an offer with no enabled users
    pub fn into_offer(self) -> OfferResult<Offer> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        require_non_empty("merchantCategory", &self.merchant_category)?;
        require_non_negative("minAmount", self.min_amount)?;
        require_non_negative("minMilestone", self.min_milestone)?;

        if !self.outcome.is_finite() || self.outcome < 0.0 {
            return Err(OfferError::Validation(format!(
                "outcome must be a non-negative number, got {}",
                self.outcome
            )));
        }

        Ok(Offer {
            id: self.id,
            name: self.name,
            description: self.description,
            reward_type: self.reward_type,
            // folds -0.0 into 0.0
            outcome: self.outcome + 0.0,
            min_amount: self.min_amount,
            min_milestone: self.min_milestone,
            details: self.details,
            merchant_category: self.merchant_category,
            enabled_for: HashMap::new(),
        })
    }
}

impl Transaction {
    pub fn validate(&self) -> OfferResult<()> {
        require_non_empty("txnId", &self.txn_id)?;
        require_non_empty("customerId", &self.customer_id)?;
        require_non_empty("merchantCategory", &self.merchant_category)?;
        require_non_negative("amount", self.amount)
    }
}
