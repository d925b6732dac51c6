pub mod models;
pub mod pricing;
pub mod session;

pub use models::{CartLineItem, TemplateRef};
pub use pricing::{OrderTotals, PricingConfig, PricingEngine};
pub use session::{AppliedOffer, Cart, CartError};
