use std::sync::Arc;

use async_trait::async_trait;
use sitekit_core::{KeyValueStore, StorageError};
use sitekit_offer::{Offer, OfferRepository};
use tracing::info;
use uuid::Uuid;

/// Offer repository over the key-value port, one JSON document per offer.
pub struct KvOfferRepository {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl KvOfferRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    fn key(&self, id: Uuid) -> String {
        format!("{}:offer:{}", self.namespace, id)
    }

    fn prefix(&self) -> String {
        format!("{}:offer:", self.namespace)
    }
}

#[async_trait]
impl OfferRepository for KvOfferRepository {
    async fn save_offer(&self, offer: &Offer) -> Result<(), StorageError> {
        let doc = serde_json::to_value(offer)?;
        self.store.set(&self.key(offer.id), doc).await?;
        info!(offer_id = %offer.id, code = %offer.code, "offer saved");
        Ok(())
    }

    async fn get_offer(&self, id: Uuid) -> Result<Option<Offer>, StorageError> {
        match self.store.get(&self.key(id)).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    async fn list_active_offers(&self) -> Result<Vec<Offer>, StorageError> {
        let docs = self.store.list(&self.prefix()).await?;

        let mut offers = Vec::with_capacity(docs.len());
        for doc in docs {
            let offer: Offer = serde_json::from_value(doc)?;
            if offer.is_active {
                offers.push(offer);
            }
        }
        Ok(offers)
    }

    async fn remove_offer(&self, id: Uuid) -> Result<bool, StorageError> {
        let removed = self.store.remove(&self.key(id)).await?;
        if removed {
            info!(offer_id = %id, "offer removed");
        }
        Ok(removed)
    }
}
