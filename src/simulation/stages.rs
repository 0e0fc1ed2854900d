//! Cross-region passes that run after every region has been advanced
//!
//! All four are identity passes today. They keep their slot in the daily
//! order so that migration, conflict spread, index recalculation and random
//! world events can be filled in without touching `advance_day`.

use serde::{Deserialize, Serialize};

use crate::world::state::WorldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldStage {
    /// Population moving between neighboring regions
    Emigration,
    /// Conflict leaking across borders
    ConflictSpread,
    /// Indices that depend on several regions at once
    IndexRecalculation,
    /// Disasters, pandemics, market shocks, large wars
    WorldEvents,
}

impl WorldStage {
    /// Order in which the stages run each day
    pub const ORDER: [WorldStage; 4] = [
        WorldStage::Emigration,
        WorldStage::ConflictSpread,
        WorldStage::IndexRecalculation,
        WorldStage::WorldEvents,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WorldStage::Emigration => "emigration",
            WorldStage::ConflictSpread => "conflict_spread",
            WorldStage::IndexRecalculation => "index_recalculation",
            WorldStage::WorldEvents => "world_events",
        }
    }

    pub fn run(&self, world: WorldState) -> WorldState {
        match self {
            WorldStage::Emigration => calculate_emigration(world),
            WorldStage::ConflictSpread => calculate_conflict_spread(world),
            WorldStage::IndexRecalculation => calculate_indices(world),
            WorldStage::WorldEvents => calculate_events(world),
        }
    }
}

/// Run every stage in `WorldStage::ORDER`
pub fn run_stages(world: WorldState) -> WorldState {
    WorldStage::ORDER
        .iter()
        .fold(world, |world, stage| stage.run(world))
}

pub fn calculate_emigration(world: WorldState) -> WorldState {
    world
}

pub fn calculate_conflict_spread(world: WorldState) -> WorldState {
    world
}

pub fn calculate_indices(world: WorldState) -> WorldState {
    world
}

pub fn calculate_events(world: WorldState) -> WorldState {
    world
}
