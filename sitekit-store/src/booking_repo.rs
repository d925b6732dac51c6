use std::sync::Arc;

use async_trait::async_trait;
use sitekit_core::{KeyValueStore, StorageError};
use sitekit_order::{Booking, BookingRepository};
use tracing::info;
use uuid::Uuid;

/// Booking repository over the key-value port.
pub struct KvBookingRepository {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl KvBookingRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    fn key(&self, id: Uuid) -> String {
        format!("{}:booking:{}", self.namespace, id)
    }

    fn prefix(&self) -> String {
        format!("{}:booking:", self.namespace)
    }
}

#[async_trait]
impl BookingRepository for KvBookingRepository {
    async fn save_booking(&self, booking: &Booking) -> Result<(), StorageError> {
        let doc = serde_json::to_value(booking)?;
        self.store.set(&self.key(booking.id), doc).await?;
        info!(booking_id = %booking.id, status = booking.status.as_str(), "booking saved");
        Ok(())
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, StorageError> {
        match self.store.get(&self.key(id)).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, StorageError> {
        let docs = self.store.list(&self.prefix()).await?;

        let mut bookings = Vec::with_capacity(docs.len());
        for doc in docs {
            bookings.push(serde_json::from_value(doc)?);
        }
        Ok(bookings)
    }

    async fn remove_booking(&self, id: Uuid) -> Result<bool, StorageError> {
        let removed = self.store.remove(&self.key(id)).await?;
        if removed {
            info!(booking_id = %id, "booking removed");
        }
        Ok(removed)
    }
}
