use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitekit_shared::Amount;
use tracing::info;
use uuid::Uuid;

use crate::pipeline::{AdminRecord, SortKey, SortValue};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (*self, next),
            (Pending, Confirmed) | (Confirmed, Completed) | (Pending, Cancelled) | (Confirmed, Cancelled)
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

/// A consultation/service booking made through the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub project_name: String,
    pub service: String,
    pub status: BookingStatus,
    pub total_price: Amount,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        client_name: impl Into<String>,
        client_email: impl Into<String>,
        project_name: impl Into<String>,
        service: impl Into<String>,
        total_price: Amount,
        scheduled_for: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            client_email: client_email.into(),
            project_name: project_name.into(),
            service: service.into(),
            status: BookingStatus::Pending,
            total_price,
            scheduled_for,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, next: BookingStatus) -> Result<(), BookingError> {
        if !self.status.can_transition_to(next) {
            return Err(BookingError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }

        info!(booking_id = %self.id, from = self.status.as_str(), to = next.as_str(), "booking status updated");
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl AdminRecord for Booking {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.client_name.clone(),
            self.client_email.clone(),
            self.project_name.clone(),
        ]
    }

    fn status_label(&self) -> &str {
        self.status.as_str()
    }

    fn sort_value(&self, key: &SortKey) -> SortValue {
        match key {
            // Unscheduled bookings sort as the epoch rather than failing.
            SortKey::Date => SortValue::Time(
                self.scheduled_for.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            ),
            SortKey::Total => SortValue::Amount(self.total_price),
            SortKey::Customer => SortValue::Text(self.client_name.clone()),
            SortKey::Field(name) => match name.as_str() {
                "id" => SortValue::Text(self.id.to_string()),
                "email" => SortValue::Text(self.client_email.clone()),
                "project" => SortValue::Text(self.project_name.clone()),
                "service" => SortValue::Text(self.service.clone()),
                "status" => SortValue::Text(self.status.as_str().to_string()),
                _ => SortValue::Text(String::new()),
            },
        }
    }
}
