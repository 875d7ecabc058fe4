mod keys;
mod manager;

pub use keys::{cidr_contains, ranges_with, select_key, ApiKey, KeySelection};
pub use manager::TokenManager;
