use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use perk_offer::{select_best_offer, Offer, OfferError, OfferRepository, OfferResult, Transaction};

/// Process-lifetime offer store.
///
/// Offers and their enablement flags sit behind a single lock: mutations take
/// the write lock, reads and selection take the read lock for their whole
/// duration. Keyed by a `BTreeMap` so listings come back in id order.
#[derive(Debug, Default)]
pub struct InMemoryOfferRepository {
    offers: RwLock<BTreeMap<String, Offer>>,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_enabled(&self, offer_id: &str, user_id: &str, enabled: bool) -> OfferResult<()> {
        let mut offers = self.offers.write();
        let offer = offers
            .get_mut(offer_id)
            .ok_or_else(|| OfferError::NotFound(offer_id.to_string()))?;

        if enabled {
            offer.enable_for(user_id);
        } else {
            offer.disable_for(user_id);
        }

        tracing::debug!(offer_id, user_id, enabled, "Offer enablement updated");
        Ok(())
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn put_offer(&self, offer: Offer) -> OfferResult<()> {
        if offer.id.is_empty() {
            return Err(OfferError::Validation("id must not be empty".to_string()));
        }

        let id = offer.id.clone();
        let replaced = self.offers.write().insert(id.clone(), offer).is_some();
        tracing::debug!(offer_id = %id, replaced, "Offer stored");
        Ok(())
    }

    async fn get_offer(&self, id: &str) -> OfferResult<Offer> {
        self.offers
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| OfferError::NotFound(id.to_string()))
    }

    async fn list_offers(&self) -> Vec<Offer> {
        self.offers.read().values().cloned().collect()
    }

    async fn enable_offer(&self, offer_id: &str, user_id: &str) -> OfferResult<()> {
        self.set_enabled(offer_id, user_id, true)
    }

    async fn disable_offer(&self, offer_id: &str, user_id: &str) -> OfferResult<()> {
        self.set_enabled(offer_id, user_id, false)
    }

    async fn is_enabled_for(&self, offer_id: &str, user_id: &str) -> OfferResult<bool> {
        self.offers
            .read()
            .get(offer_id)
            .map(|offer| offer.is_enabled_for(user_id))
            .ok_or_else(|| OfferError::NotFound(offer_id.to_string()))
    }

    async fn best_offer_for(&self, transaction: &Transaction) -> Option<Offer> {
        let offers = self.offers.read();
        select_best_offer(transaction, offers.values()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use perk_offer::RewardType;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn offer(id: &str, min_amount: i64, outcome: f64) -> Offer {
        Offer {
            id: id.to_string(),
            name: format!("Offer {}", id),
            description: String::new(),
            reward_type: RewardType::Points,
            outcome,
            min_amount,
            min_milestone: 0,
            details: String::new(),
            merchant_category: "grocery".to_string(),
            enabled_for: HashMap::new(),
        }
    }

    fn txn(customer: &str, amount: i64) -> Transaction {
        Transaction {
            txn_id: format!("t-{}-{}", customer, amount),
            customer_id: customer.to_string(),
            amount,
            merchant_id: "m-1".to_string(),
            merchant_category: "grocery".to_string(),
            post_entry_mode: "contactless".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryOfferRepository::new();
        repo.put_offer(offer("A", 100, 5.0)).await.unwrap();

        assert_eq!(repo.get_offer("A").await.unwrap().min_amount, 100);
        assert_eq!(repo.get_offer("Z").await, Err(OfferError::NotFound("Z".to_string())));
    }

    #[tokio::test]
    async fn test_put_rejects_empty_id() {
        let repo = InMemoryOfferRepository::new();
        assert!(matches!(repo.put_offer(offer("", 0, 1.0)).await, Err(OfferError::Validation(_))));
        assert!(repo.list_offers().await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_drops_enablement() {
        let repo = InMemoryOfferRepository::new();
        repo.put_offer(offer("A", 100, 5.0)).await.unwrap();
        repo.enable_offer("A", "u1").await.unwrap();
        assert!(repo.is_enabled_for("A", "u1").await.unwrap());

        repo.put_offer(offer("A", 10, 2.0)).await.unwrap();
        let stored = repo.get_offer("A").await.unwrap();
        assert_eq!(stored.min_amount, 10);
        assert!(stored.enabled_for.is_empty());
        assert_eq!(repo.list_offers().await.len(), 1);
    }

    #[tokio::test]
    async fn test_enable_disable_unknown_offer() {
        let repo = InMemoryOfferRepository::new();
        assert_eq!(repo.enable_offer("nope", "u1").await, Err(OfferError::NotFound("nope".to_string())));
        assert_eq!(repo.disable_offer("nope", "u1").await, Err(OfferError::NotFound("nope".to_string())));
    }

    #[tokio::test]
    async fn test_list_is_sorted_snapshot() {
        let repo = InMemoryOfferRepository::new();
        repo.put_offer(offer("c", 0, 1.0)).await.unwrap();
        repo.put_offer(offer("a", 0, 1.0)).await.unwrap();
        repo.put_offer(offer("b", 0, 1.0)).await.unwrap();

        let mut snapshot = repo.list_offers().await;
        let ids: Vec<_> = snapshot.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        snapshot[0].enable_for("u1");
        assert!(!repo.is_enabled_for("a", "u1").await.unwrap());
    }

    #[tokio::test]
    async fn test_disable_after_enable_yields_no_offer() {
        let repo = InMemoryOfferRepository::new();
        repo.put_offer(offer("A", 100, 5.0)).await.unwrap();
        repo.enable_offer("A", "u1").await.unwrap();
        assert_eq!(repo.best_offer_for(&txn("u1", 150)).await.unwrap().id, "A");

        repo.disable_offer("A", "u1").await.unwrap();
        assert!(repo.best_offer_for(&txn("u1", 150)).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_requests() {
        let repo = Arc::new(InMemoryOfferRepository::new());
        repo.put_offer(offer("base", 0, 1.0)).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let user = format!("u{}", i);
                repo.put_offer(offer(&format!("o{:02}", i), 0, i as f64)).await.unwrap();
                repo.enable_offer("base", &user).await.unwrap();
                repo.best_offer_for(&txn(&user, 50)).await
            }));
        }

        for handle in handles {
            let best = handle.await.unwrap().unwrap();
            assert_eq!(best.id, "base");
        }

        assert_eq!(repo.list_offers().await.len(), 33);
        let base = repo.get_offer("base").await.unwrap();
        assert_eq!(base.enabled_for.len(), 32);
        assert!(base.enabled_for.values().all(|enabled| *enabled));
    }
}
