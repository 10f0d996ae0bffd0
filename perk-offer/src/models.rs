use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Kind of reward an offer grants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    Cashback,
    Discount,
    Points,
}

/// A purchase transaction submitted for offer evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub txn_id: String,
    pub customer_id: String,
    /// Smallest currency unit
    pub amount: i64,
    #[serde(default)]
    pub merchant_id: String,
    pub merchant_category: String,
    #[serde(default)]
    pub post_entry_mode: String,
    pub timestamp: DateTime<Utc>,
}

/// A promotional offer together with its per-user enablement flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub description: String,
    pub reward_type: RewardType,
    /// Ranking score, higher is better for the customer
    pub outcome: f64,
    pub min_amount: i64,
    /// Stored for milestone rewards; not part of eligibility.
    pub min_milestone: i64,
    pub details: String,
    pub merchant_category: String,
    #[serde(default)]
    pub enabled_for: HashMap<String, bool>,
}

impl Offer {
    /// Enable the offer for a user
    pub fn enable_for(&mut self, user_id: &str) {
        self.enabled_for.insert(user_id.to_string(), true);
    }

    /// Disable the offer for a user. Records an explicit `false` even if the
    /// user was never enabled.
    pub fn disable_for(&mut self, user_id: &str) {
        self.enabled_for.insert(user_id.to_string(), false);
    }

    /// Absent entries count as disabled
    pub fn is_enabled_for(&self, user_id: &str) -> bool {
        self.enabled_for.get(user_id).copied().unwrap_or(false)
    }
}

/// Creation payload for an offer.
///
/// Carries no enablement map: enablement only changes through the explicit
/// enable/disable operations, so any `enabledFor` sent by a client is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub reward_type: RewardType,
    pub outcome: f64,
    pub min_amount: i64,
    #[serde(default)]
    pub min_milestone: i64,
    #[serde(default)]
    pub details: String,
    pub merchant_category: String,
}

/// Receipt for an offer applied to a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferApplication {
    pub application_id: Uuid,
    pub txn_id: String,
    pub customer_id: String,
    pub offer: Offer,
    pub applied_at: DateTime<Utc>,
}

impl OfferApplication {
    pub fn new(transaction: &Transaction, offer: Offer) -> Self {
        Self {
            application_id: Uuid::new_v4(),
            txn_id: transaction.txn_id.clone(),
            customer_id: transaction.customer_id.clone(),
            offer,
            applied_at: Utc::now(),
        }
    }
}
