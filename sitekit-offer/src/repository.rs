use async_trait::async_trait;
use sitekit_core::StorageError;
use uuid::Uuid;

use crate::models::Offer;

/// Repository trait for offer data access.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn save_offer(&self, offer: &Offer) -> Result<(), StorageError>;

    async fn get_offer(&self, id: Uuid) -> Result<Option<Offer>, StorageError>;

    /// Offers with `is_active` set. Expiry is not filtered here; the
    /// checkout flow re-checks it at resolution time.
    async fn list_active_offers(&self) -> Result<Vec<Offer>, StorageError>;

    async fn remove_offer(&self, id: Uuid) -> Result<bool, StorageError>;
}
