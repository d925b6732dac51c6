pub mod models;
pub mod money;

pub use models::customer::Customer;
pub use money::{percentage_of, round_half_up, Amount};
