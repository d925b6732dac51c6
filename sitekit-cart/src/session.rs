use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitekit_offer::{resolve_offer, Discount, Offer, OfferError};
use sitekit_shared::Amount;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::CartLineItem;
use crate::pricing::{OrderTotals, PricingEngine};

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Line item price cannot be negative: {0}")]
    NegativePrice(Amount),

    #[error(transparent)]
    Offer(#[from] OfferError),
}

/// Snapshot of the offer applied to a cart.
///
/// Holds the resolved discount so totals stay stable even if the admin
/// edits the offer while the session is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedOffer {
    pub offer_id: Uuid,
    pub code: String,
    pub discount: Discount,
}

/// A customer's checkout session.
///
/// Owns the "offer applied" state; the pricing engine itself is stateless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub items: Vec<CartLineItem>,
    pub applied_offer: Option<AppliedOffer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
            applied_offer: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, item: CartLineItem) {
        self.items.push(item);
        self.updated_at = Utc::now();
    }

    /// Remove a line item. Returns whether it was present.
    pub fn remove_item(&mut self, item_id: &Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != item_id);

        let removed = self.items.len() < before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Apply a discount code against the active-offer list.
    ///
    /// On rejection the cart is left unchanged; the caller surfaces the
    /// error as a notification and the customer can retry or proceed
    /// without a discount.
    pub fn apply_code(&mut self, code: &str, offers: &[Offer]) -> Result<AppliedOffer, CartError> {
        let offer = match resolve_offer(code, offers, Utc::now()) {
            Ok(offer) => offer,
            Err(err) => {
                warn!(code, %err, "discount code rejected");
                return Err(err.into());
            }
        };

        info!(code = %offer.code, discount = %offer.discount, "discount code applied");
        let applied = AppliedOffer {
            offer_id: offer.id,
            code: offer.code.clone(),
            discount: offer.discount,
        };
        self.applied_offer = Some(applied.clone());
        self.updated_at = Utc::now();

        Ok(applied)
    }

    pub fn remove_offer(&mut self) {
        if self.applied_offer.take().is_some() {
            self.updated_at = Utc::now();
        }
    }

    /// Current totals for this session's items and applied offer.
    pub fn totals(&self, engine: &PricingEngine) -> OrderTotals {
        engine.totals(
            &self.items,
            self.applied_offer.as_ref().map(|applied| &applied.discount),
        )
    }

    /// Empty the cart after checkout completes.
    pub fn clear(&mut self) {
        self.items.clear();
        self.applied_offer = None;
        self.updated_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
