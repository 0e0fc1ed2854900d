//! Simulation: daily update rules and the scheduler driving them
//!
//! region_update -> world_update -> stages, all pure functions over an
//! explicit `WorldState`. The scheduler is the only stateful piece.

pub mod events;
pub mod indices;
pub mod region_update;
pub mod scheduler;
pub mod stages;
pub mod world_update;

pub use events::{NewsEvent, NewsKind, NewsLog};
pub use indices::finance_index;
pub use region_update::{advance_region, advance_region_unclamped, DAYS_PER_YEAR};
pub use scheduler::{Scheduler, TickOutcome};
pub use stages::{run_stages, WorldStage};
pub use world_update::{advance_day, advance_day_reporting, NonFiniteReport};
