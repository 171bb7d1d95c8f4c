pub mod config;
pub mod types;

pub use config::PolicyConfig;
pub use types::*;
