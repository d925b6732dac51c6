pub mod app_config;
pub mod booking_repo;
pub mod memory;
pub mod offer_repo;
pub mod order_repo;

pub use app_config::Config;
pub use booking_repo::KvBookingRepository;
pub use memory::MemoryStore;
pub use offer_repo::KvOfferRepository;
pub use order_repo::KvOrderRepository;
