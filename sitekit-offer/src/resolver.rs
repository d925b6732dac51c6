use chrono::{DateTime, Utc};

use crate::models::Offer;

/// Rejections from discount-code resolution.
///
/// "Not found" and "expired" are distinct variants; the storefront may
/// collapse them into one toast, but callers can tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum OfferError {
    #[error("Discount code not found: {0}")]
    CodeNotFound(String),

    #[error("Discount code expired: {0}")]
    CodeExpired(String),
}

/// Resolve a discount code against the active-offer list.
///
/// Case-insensitive match; first match wins. The caller is expected to have
/// pre-filtered to `is_active` offers, but expiry is re-checked here: a
/// matched offer whose `valid_until` is strictly before `now` is rejected
/// regardless of its active flag.
pub fn resolve_offer<'a>(
    code: &str,
    offers: &'a [Offer],
    now: DateTime<Utc>,
) -> Result<&'a Offer, OfferError> {
    let offer = offers
        .iter()
        .find(|o| o.matches_code(code))
        .ok_or_else(|| OfferError::CodeNotFound(code.trim().to_string()))?;

    if offer.is_expired(now) {
        return Err(OfferError::CodeExpired(offer.code.clone()));
    }

    Ok(offer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::Discount;
    use chrono::Duration;

    fn offers() -> Vec<Offer> {
        vec![
            Offer::new("WELCOME10", Discount::Percentage(10.0), None),
            Offer::new("FLAT500", Discount::FlatAmount(500), None),
        ]
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let offers = offers();
        let offer = resolve_offer("welcome10", &offers, Utc::now()).unwrap();
        assert_eq!(offer.code, "WELCOME10");
    }

    #[test]
    fn test_resolve_not_found() {
        let offers = offers();
        let err = resolve_offer("NOSUCHCODE", &offers, Utc::now()).unwrap_err();
        assert!(matches!(err, OfferError::CodeNotFound(_)));
    }

    #[test]
    fn test_resolve_rejects_expired_even_if_active() {
        let now = Utc::now();
        let mut offer = Offer::new("LAPSED", Discount::Percentage(20.0), Some(now - Duration::days(1)));
        offer.is_active = true;

        let err = resolve_offer("lapsed", &[offer], now).unwrap_err();
        assert!(matches!(err, OfferError::CodeExpired(_)));
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let mut duplicated = offers();
        duplicated.push(Offer::new("WELCOME10", Discount::Percentage(50.0), None));

        let offer = resolve_offer("WELCOME10", &duplicated, Utc::now()).unwrap();
        assert_eq!(offer.discount, Discount::Percentage(10.0));
    }
}
