mod builtin;
mod config;
mod manager;

pub use builtin::BUILTIN_INGREDIENTS;
pub use config::{load_config, KitchenConfig};
pub use manager::Catalog;
