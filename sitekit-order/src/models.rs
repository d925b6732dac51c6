use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitekit_shared::{Amount, Customer};
use tracing::info;
use uuid::Uuid;

use crate::pipeline::{AdminRecord, SortKey, SortValue};

/// Order status in the project lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Label used by the dashboard status filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (*self, next),
            (Pending, Confirmed)
                | (Confirmed, InProgress)
                | (InProgress, Completed)
                | (Pending, Cancelled)
                | (Confirmed, Cancelled)
                | (InProgress, Cancelled)
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

/// Payment details captured from the checkout widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: String,
    pub total: Amount,
}

/// One purchased website in an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub template_name: String,
    pub description: Option<String>,
    pub price: Amount,
}

impl OrderItem {
    pub fn new(template_name: impl Into<String>, description: Option<String>, price: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            template_name: template_name.into(),
            description,
            price,
        }
    }
}

/// A customer's placed order.
///
/// Mutated only by admin status updates; removed only by explicit admin
/// action through the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub payment: PaymentInfo,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Record an order at checkout completion.
    pub fn place(customer: Customer, items: Vec<OrderItem>, payment: PaymentInfo) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer,
            items,
            payment,
            status: OrderStatus::Pending,
            placed_at: now,
            updated_at: now,
        }
    }

    /// Admin status update. `Completed` and `Cancelled` are terminal.
    pub fn update_status(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }

        info!(order_id = %self.id, from = self.status.as_str(), to = next.as_str(), "order status updated");
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl AdminRecord for Order {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.customer.name.clone(),
            self.customer.email.clone(),
        ]
    }

    fn status_label(&self) -> &str {
        self.status.as_str()
    }

    fn sort_value(&self, key: &SortKey) -> SortValue {
        match key {
            SortKey::Date => SortValue::Time(self.placed_at),
            SortKey::Total => SortValue::Amount(self.payment.total),
            SortKey::Customer => SortValue::Text(self.customer.name.clone()),
            SortKey::Field(name) => match name.as_str() {
                "id" => SortValue::Text(self.id.to_string()),
                "email" => SortValue::Text(self.customer.email.clone()),
                "status" => SortValue::Text(self.status.as_str().to_string()),
                _ => SortValue::Text(String::new()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order::place(
            Customer::new("Jane Cooper", "jane@example.com"),
            vec![OrderItem::new("Storefront Plus", None, 14999)],
            PaymentInfo {
                method: "card".to_string(),
                total: 17699,
            },
        )
    }

    #[test]
    fn test_order_lifecycle() {
        let mut order = order();
        assert_eq!(order.status, OrderStatus::Pending);

        order.update_status(OrderStatus::Confirmed).unwrap();
        order.update_status(OrderStatus::InProgress).unwrap();
        order.update_status(OrderStatus::Completed).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_cannot_skip_to_completed() {
        let mut order = order();
        let result = order.update_status(OrderStatus::Completed);
        assert!(matches!(result, Err(OrderError::InvalidTransition { .. })));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut cancelled = order();
        cancelled.update_status(OrderStatus::Cancelled).unwrap();
        assert!(cancelled.update_status(OrderStatus::Pending).is_err());
        assert!(cancelled.update_status(OrderStatus::Confirmed).is_err());

        let mut completed = order();
        completed.update_status(OrderStatus::Confirmed).unwrap();
        completed.update_status(OrderStatus::InProgress).unwrap();
        completed.update_status(OrderStatus::Completed).unwrap();
        assert!(completed.update_status(OrderStatus::Cancelled).is_err());
    }

    #[test]
    fn test_cancel_from_any_open_state() {
        let mut order = order();
        order.update_status(OrderStatus::Confirmed).unwrap();
        order.update_status(OrderStatus::Cancelled).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }
}
