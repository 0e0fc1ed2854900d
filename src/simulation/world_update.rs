//! Daily update of the whole world

use crate::core::types::RegionName;
use crate::simulation::region_update::{advance_region, DAYS_PER_YEAR};
use crate::simulation::stages::run_stages;
use crate::world::region::RegionField;
use crate::world::state::WorldState;

/// A region indicator that became NaN or infinite during a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonFiniteReport {
    pub region: RegionName,
    pub field: RegionField,
}

/// Advance the world by one day.
///
/// Regions are advanced against the snapshot passed in, so every region sees
/// yesterday's global temperature regardless of its position in the list.
pub fn advance_day(world: &WorldState) -> WorldState {
    advance_day_reporting(world).0
}

/// Advance the world by one day and report every non-finite indicator of
/// the new state. Each report is logged once here.
pub fn advance_day_reporting(world: &WorldState) -> (WorldState, Vec<NonFiniteReport>) {
    let regions = world
        .regions
        .iter()
        .map(|region| advance_region(world, region))
        .collect();

    let next = WorldState {
        day: world.day + 1,
        co2ppm: world.co2ppm + world.co2ppm_delta / DAYS_PER_YEAR,
        global_temp_diff: world.global_temp_diff + world.global_temp_diff_delta / DAYS_PER_YEAR,
        regions,
        ..world.clone()
    };

    let next = run_stages(next);

    let mut reports = Vec::new();
    for region in &next.regions {
        for field in region.non_finite_fields() {
            tracing::error!(
                "Day {}: {} has non-finite {} ({})",
                next.day,
                region.name,
                field.name(),
                field.get(region)
            );
            reports.push(NonFiniteReport { region: region.name, field });
        }
    }

    tracing::debug!(
        day = next.day,
        co2ppm = next.co2ppm,
        population = next.total_population(),
        "Day advanced"
    );

    (next, reports)
}
