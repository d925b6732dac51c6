pub mod booking;
pub mod models;
pub mod pipeline;
pub mod repository;

pub use booking::{Booking, BookingError, BookingStatus};
pub use models::{Order, OrderError, OrderItem, OrderStatus, PaymentInfo};
pub use pipeline::{
    AdminListQuery, AdminRecord, Page, SortDirection, SortKey, SortState, StatusFilter,
};
pub use repository::{BookingRepository, OrderRepository};
