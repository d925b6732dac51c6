use std::sync::Arc;

use async_trait::async_trait;
use sitekit_core::{KeyValueStore, StorageError};
use sitekit_order::{Order, OrderRepository};
use tracing::info;
use uuid::Uuid;

/// Order repository over the key-value port.
pub struct KvOrderRepository {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl KvOrderRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    fn key(&self, id: Uuid) -> String {
        format!("{}:order:{}", self.namespace, id)
    }

    fn prefix(&self) -> String {
        format!("{}:order:", self.namespace)
    }
}

#[async_trait]
impl OrderRepository for KvOrderRepository {
    async fn save_order(&self, order: &Order) -> Result<(), StorageError> {
        let doc = serde_json::to_value(order)?;
        self.store.set(&self.key(order.id), doc).await?;
        info!(order_id = %order.id, status = order.status.as_str(), "order saved");
        Ok(())
    }

    async fn get_order(&self, id: Uuid) -> Result<Option<Order>, StorageError> {
        match self.store.get(&self.key(id)).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StorageError> {
        let docs = self.store.list(&self.prefix()).await?;

        let mut orders = Vec::with_capacity(docs.len());
        for doc in docs {
            orders.push(serde_json::from_value(doc)?);
        }
        Ok(orders)
    }

    async fn remove_order(&self, id: Uuid) -> Result<bool, StorageError> {
        let removed = self.store.remove(&self.key(id)).await?;
        if removed {
            info!(order_id = %id, "order removed");
        }
        Ok(removed)
    }
}
