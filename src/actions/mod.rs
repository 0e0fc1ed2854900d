//! Interventions: costed actions the player applies to one region

pub mod apply;
pub mod catalog;
pub mod formula;
mod loader;

pub use apply::{apply_intervention, apply_queued, InterventionOutcome, Rejection};
pub use catalog::{Intervention, InterventionCatalog, InterventionId};
pub use formula::{CostFormula, EffectFormula};
pub use loader::{load_catalog, parse_catalog};
