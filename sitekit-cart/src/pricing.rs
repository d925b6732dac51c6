use serde::{Deserialize, Serialize};
use sitekit_offer::Discount;
use sitekit_shared::{percentage_of, round_half_up, Amount};

use crate::models::CartLineItem;

/// Pricing policy knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied to the post-discount amount.
    pub tax_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self { tax_rate: 0.18 }
    }
}

/// The four derived checkout totals.
///
/// Recomputed from cart state on every call, never persisted. All values
/// are whole currency units, rounded half-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Amount,
    pub discount_amount: Amount,
    pub tax_amount: Amount,
    pub total: Amount,
}

/// Computes checkout totals for a set of line items and an optional
/// applied discount.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Sum of line-item prices. An empty cart totals zero; that is a valid
    /// state, not an error.
    pub fn subtotal(&self, items: &[CartLineItem]) -> Amount {
        items.iter().map(|item| item.price).sum()
    }

    /// Amount taken off the subtotal by the discount.
    ///
    /// A flat amount is capped at the subtotal so the total can never go
    /// negative.
    pub fn discount_amount(&self, subtotal: Amount, discount: Option<&Discount>) -> Amount {
        match discount {
            Some(Discount::Percentage(pct)) => percentage_of(subtotal, *pct),
            Some(Discount::FlatAmount(amount)) => (*amount).min(subtotal),
            None => 0,
        }
    }

    /// Tax on the post-discount amount.
    ///
    /// Discount-then-tax is a fixed policy: applying tax before the
    /// discount would yield a different total.
    pub fn tax_amount(&self, subtotal: Amount, discount_amount: Amount) -> Amount {
        round_half_up((subtotal - discount_amount) as f64 * self.config.tax_rate)
    }

    /// Compute all four totals for the given cart state.
    pub fn totals(&self, items: &[CartLineItem], discount: Option<&Discount>) -> OrderTotals {
        let subtotal = self.subtotal(items);
        let discount_amount = self.discount_amount(subtotal, discount);
        let tax_amount = self.tax_amount(subtotal, discount_amount);

        OrderTotals {
            subtotal,
            discount_amount,
            tax_amount,
            total: subtotal - discount_amount + tax_amount,
        }
    }
}
