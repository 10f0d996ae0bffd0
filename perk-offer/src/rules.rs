use std::cmp::Ordering;
use crate::models::{Offer, Transaction};

/// Whether `offer` may be applied to `transaction`.
///
/// All conditions must hold: the amount reaches the offer's inclusive
/// minimum, the merchant category matches exactly, and the customer is
/// enabled for the offer. `min_milestone` is not consulted.
pub fn is_applicable(transaction: &Transaction, offer: &Offer) -> bool {
    transaction.amount >= offer.min_amount
        && transaction.merchant_category == offer.merchant_category
        && offer.is_enabled_for(&transaction.customer_id)
}

/// Pick the single best applicable offer, or `None` when nothing applies.
///
/// Highest `outcome` wins; equal outcomes resolve to the lowest offer id so
/// the result never depends on iteration order.
pub fn select_best_offer<'a, I>(transaction: &Transaction, offers: I) -> Option<&'a Offer>
where
    I: IntoIterator<Item = &'a Offer>,
{
    let mut best: Option<&'a Offer> = None;

    for offer in offers {
        if !is_applicable(transaction, offer) {
            continue;
        }

        best = match best {
            Some(current) if rank(offer, current) != Ordering::Greater => Some(current),
            _ => Some(offer),
        };
    }

    best
}

fn rank(candidate: &Offer, current: &Offer) -> Ordering {
    candidate
        .outcome
        .partial_cmp(&current.outcome)
        .unwrap_or(Ordering::Equal)
        .then_with(|| current.id.cmp(&candidate.id))
}
