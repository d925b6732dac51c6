use async_trait::async_trait;
use sitekit_core::StorageError;
use uuid::Uuid;

use crate::booking::Booking;
use crate::models::Order;

/// Repository trait for order data access.
///
/// Status changes go through `Order::update_status` followed by
/// `save_order`; the store itself is last-write-wins.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save_order(&self, order: &Order) -> Result<(), StorageError>;

    async fn get_order(&self, id: Uuid) -> Result<Option<Order>, StorageError>;

    async fn list_orders(&self) -> Result<Vec<Order>, StorageError>;

    /// Explicit admin deletion. Returns whether the order existed.
    async fn remove_order(&self, id: Uuid) -> Result<bool, StorageError>;
}

/// Repository trait for booking data access.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn save_booking(&self, booking: &Booking) -> Result<(), StorageError>;

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, StorageError>;

    async fn list_bookings(&self) -> Result<Vec<Booking>, StorageError>;

    async fn remove_booking(&self, id: Uuid) -> Result<bool, StorageError>;
}
