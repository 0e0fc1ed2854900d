//! Daily update of a single region
//!
//! Every "per year" quantity is divided by `DAYS_PER_YEAR` to get the daily
//! step. The steps run in a fixed order on a working copy, so later steps
//! see values written by earlier ones (e.g. happiness before conflict).

use crate::simulation::indices::finance_index;
use crate::world::bounds::clamp_region;
use crate::world::region::RegionState;
use crate::world::state::WorldState;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Population ratio above which crowding starts to hurt happiness
const OVERPOPULATION_THRESHOLD: f64 = 0.7;

/// Tech acceleration above which people grow wary of change
const TECH_SHOCK_THRESHOLD: f64 = 0.4;

/// Yearly population change before dividing by days per year
pub fn yearly_population_change(region: &RegionState) -> f64 {
    let pop = region.total_population;

    let births = pop * region.birth_rate / 1000.0;
    let natural_deaths = pop / region.life_expectancy;
    // level 1 ~ 1/10000 per year, level 8 ~ 1/10 per year
    let conflict_deaths = pop / 10_000.0 * 2.3f64.powf(region.conflict_level);
    let disease_deaths = pop / 1000.0 * (region.disease_index / 5.0).powi(2);

    births - natural_deaths - conflict_deaths - disease_deaths
}

fn overpopulation_term(population_ratio: f64) -> f64 {
    if population_ratio > OVERPOPULATION_THRESHOLD {
        (0.8 - population_ratio) * 0.001
    } else {
        0.004
    }
}

fn tech_shock_penalty(tech_index_delta: f64) -> f64 {
    if tech_index_delta > TECH_SHOCK_THRESHOLD {
        tech_index_delta / 20.0
    } else {
        0.0
    }
}

/// Advance a region by one day without applying the bounds policy
///
/// `world` is the previous day's snapshot; only its global scalars are read.
pub fn advance_region_unclamped(world: &WorldState, region: &RegionState) -> RegionState {
    let mut r = region.clone();

    let population_ratio = region.population_ratio();

    r.total_population += yearly_population_change(region) / DAYS_PER_YEAR;

    r.birth_rate += r.birth_rate_delta / DAYS_PER_YEAR;
    // Linear pull back toward the original population for now
    r.birth_rate_delta +=
        ((r.happiness - 6.5) / 300.0 + 0.03 * (1.0 - population_ratio)) / DAYS_PER_YEAR;

    r.life_expectancy += r.life_expectancy_delta / DAYS_PER_YEAR;
    r.life_expectancy_delta += ((r.happiness - 6.0) / 30.0
        + r.tech_index_delta / 5.0
        + (5.0 - r.disease_index) / 10.0)
        / DAYS_PER_YEAR;

    r.gdp_capita *= 1.0 + r.gdp_capita_multiplier / DAYS_PER_YEAR;
    r.gdp_capita_multiplier +=
        (r.tech_index_delta / 10.0 - r.corruption_index / 100.0) / DAYS_PER_YEAR;

    r.happiness += r.happiness_delta / DAYS_PER_YEAR;
    r.happiness_delta += (overpopulation_term(population_ratio)
        + r.life_expectancy_delta / 20.0
        + (r.finance_index - 4.0) / 200.0
        + (r.education_index - 6.0) / 200.0
        + (r.tech_index - 8.0) / 200.0
        - tech_shock_penalty(r.tech_index_delta)
        - r.conflict_level / 40.0
        - r.global_temp_diff_sensitivity * world.global_temp_diff / 1.5 / 100.0)
        / DAYS_PER_YEAR;

    r.food_index += ((r.finance_index - 2.0).min(5.0) / 10.0 - r.conflict_level / 3.0)
        / DAYS_PER_YEAR;

    r.finance_index = finance_index(r.gdp_capita);

    r.education_index +=
        ((r.food_index - 8.0) / 20.0 + (r.happiness - 5.5) / 10.0) / DAYS_PER_YEAR;

    r.tech_index += r.tech_index_delta / DAYS_PER_YEAR;
    r.tech_index_delta += (r.tech_index / 1000.0 + r.education_index / 30.0
        - r.conflict_level / 20.0)
        / DAYS_PER_YEAR;

    // disease_index has no dynamics yet and carries over unchanged

    r.conflict_level += ((6.5 - r.happiness) - r.conflict_level / 3.0) / DAYS_PER_YEAR;

    r.corruption_index += (5.7 - r.happiness) / 20.0 / DAYS_PER_YEAR;

    r
}

/// Advance a region by one day and clamp the result
pub fn advance_region(world: &WorldState, region: &RegionState) -> RegionState {
    clamp_region(&advance_region_unclamped(world, region))
}
