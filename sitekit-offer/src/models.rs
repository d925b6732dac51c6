use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::discount::{Discount, DiscountParseError};

/// A promotional offer redeemable at checkout.
///
/// Created and edited by administrators; read-only to the checkout flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    /// Redemption code, matched case-insensitively.
    pub code: String,
    pub discount: Discount,
    pub is_active: bool,
    /// An offer past this instant is expired regardless of `is_active`.
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    pub fn new(code: impl Into<String>, discount: Discount, valid_until: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code: code.into().trim().to_string(),
            discount,
            is_active: true,
            valid_until,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an offer from the admin form's free-form discount string.
    pub fn from_discount_string(
        code: impl Into<String>,
        discount: &str,
        valid_until: Option<DateTime<Utc>>,
    ) -> Result<Self, DiscountParseError> {
        Ok(Self::new(code, discount.parse()?, valid_until))
    }

    /// Whether `valid_until` has strictly passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.valid_until.map(|until| until < now).unwrap_or(false)
    }

    pub fn matches_code(&self, code: &str) -> bool {
        self.code.to_lowercase() == code.trim().to_lowercase()
    }

    /// Replace the discount and validity window, stamping `updated_at`.
    pub fn edit(&mut self, discount: Discount, valid_until: Option<DateTime<Utc>>) {
        self.discount = discount;
        self.valid_until = valid_until;
        self.updated_at = Utc::now();
    }

    /// Take the offer out of circulation without deleting it.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_is_strict() {
        let now = Utc::now();
        let mut offer = Offer::new("WELCOME10", Discount::Percentage(10.0), Some(now));

        // Exactly at the boundary the offer is still valid.
        assert!(!offer.is_expired(now));
        assert!(offer.is_expired(now + Duration::seconds(1)));

        // No validity window means the offer never expires.
        offer.valid_until = None;
        assert!(!offer.is_expired(now + Duration::days(365)));
    }

    #[test]
    fn test_code_match_is_case_insensitive() {
        let offer = Offer::new("Welcome10", Discount::Percentage(10.0), None);
        assert!(offer.matches_code("WELCOME10"));
        assert!(offer.matches_code("  welcome10 "));
        assert!(!offer.matches_code("welcome20"));
    }

    #[test]
    fn test_deactivate_keeps_record() {
        let mut offer = Offer::new("SUMMER", Discount::FlatAmount(500), None);
        offer.deactivate();
        assert!(!offer.is_active);
    }
}
