pub mod discount;
pub mod models;
pub mod repository;
pub mod resolver;

pub use discount::{Discount, DiscountParseError};
pub use models::Offer;
pub use repository::OfferRepository;
pub use resolver::{resolve_offer, OfferError};
