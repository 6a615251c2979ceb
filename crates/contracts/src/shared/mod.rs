pub mod pos_config;
pub mod scalar;

pub use pos_config::{is_walk_in_id, PosConfig};
