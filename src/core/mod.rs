pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{Calendar, Day};
pub use config::EngineConfig;
pub use error::{Result, SimError};
pub use types::{MapRect, RegionName};
