//! Day-0 world: the nine regions with their starting indicators

use crate::core::config::EngineConfig;
use crate::core::types::{MapRect, RegionName};
use crate::simulation::indices::finance_index;
use crate::world::bounds::clamp_region;
use crate::world::region::RegionState;
use crate::world::state::WorldState;

/// Starting indicators of one region, before derived fields are filled in
struct RegionSeed {
    population: f64,
    birth_rate: f64,
    birth_rate_delta: f64,
    life_expectancy: f64,
    life_expectancy_delta: f64,
    gdp_capita: f64,
    gdp_capita_multiplier: f64,
    happiness: f64,
    food_index: f64,
    education_index: f64,
    tech_index: f64,
    tech_index_delta: f64,
    disease_index: f64,
    conflict_level: f64,
    corruption_index: f64,
    global_temp_diff_sensitivity: f64,
    neighbors: &'static [RegionName],
    map_rect: MapRect,
}

fn seed_for(name: RegionName) -> RegionSeed {
    use RegionName::*;

    match name {
        Africa => RegionSeed {
            population: 1.34e9,
            birth_rate: 33.0,
            birth_rate_delta: -0.4,
            life_expectancy: 63.0,
            life_expectancy_delta: 0.25,
            gdp_capita: 5_000.0,
            gdp_capita_multiplier: 0.03,
            happiness: 4.6,
            food_index: 4.5,
            education_index: 4.0,
            tech_index: 18.0,
            tech_index_delta: 0.2,
            disease_index: 9.0,
            conflict_level: 3.0,
            corruption_index: 0.45,
            global_temp_diff_sensitivity: 1.6,
            neighbors: &[Europe, Asia],
            map_rect: MapRect::new(520, 250, 200, 220),
        },
        Asia => RegionSeed {
            population: 4.6e9,
            birth_rate: 16.0,
            birth_rate_delta: -0.3,
            life_expectancy: 74.0,
            life_expectancy_delta: 0.2,
            gdp_capita: 15_000.0,
            gdp_capita_multiplier: 0.05,
            happiness: 5.3,
            food_index: 6.5,
            education_index: 6.0,
            tech_index: 45.0,
            tech_index_delta: 0.35,
            disease_index: 5.0,
            conflict_level: 2.0,
            corruption_index: 0.35,
            global_temp_diff_sensitivity: 1.2,
            neighbors: &[Africa, Europe, Russia, Australia],
            map_rect: MapRect::new(760, 160, 260, 200),
        },
        Europe => RegionSeed {
            population: 7.5e8,
            birth_rate: 10.0,
            birth_rate_delta: -0.05,
            life_expectancy: 81.0,
            life_expectancy_delta: 0.15,
            gdp_capita: 42_000.0,
            gdp_capita_multiplier: 0.015,
            happiness: 6.8,
            food_index: 8.5,
            education_index: 8.0,
            tech_index: 70.0,
            tech_index_delta: 0.3,
            disease_index: 3.0,
            conflict_level: 0.5,
            corruption_index: 0.15,
            global_temp_diff_sensitivity: 0.8,
            neighbors: &[Africa, Asia, Russia],
            map_rect: MapRect::new(540, 110, 150, 120),
        },
        NorthAmerica => RegionSeed {
            population: 3.7e8,
            birth_rate: 11.5,
            birth_rate_delta: -0.1,
            life_expectancy: 79.0,
            life_expectancy_delta: 0.1,
            gdp_capita: 62_000.0,
            gdp_capita_multiplier: 0.02,
            happiness: 6.9,
            food_index: 8.8,
            education_index: 7.8,
            tech_index: 80.0,
            tech_index_delta: 0.35,
            disease_index: 3.0,
            conflict_level: 0.5,
            corruption_index: 0.12,
            global_temp_diff_sensitivity: 0.9,
            neighbors: &[CentralAmerica, Russia],
            map_rect: MapRect::new(120, 80, 280, 170),
        },
        CentralAmerica => RegionSeed {
            population: 1.8e8,
            birth_rate: 18.0,
            birth_rate_delta: -0.2,
            life_expectancy: 75.0,
            life_expectancy_delta: 0.2,
            gdp_capita: 17_000.0,
            gdp_capita_multiplier: 0.025,
            happiness: 6.1,
            food_index: 6.0,
            education_index: 5.5,
            tech_index: 30.0,
            tech_index_delta: 0.2,
            disease_index: 5.0,
            conflict_level: 2.5,
            corruption_index: 0.4,
            global_temp_diff_sensitivity: 1.1,
            neighbors: &[NorthAmerica, SouthAmerica],
            map_rect: MapRect::new(200, 250, 110, 70),
        },
        SouthAmerica => RegionSeed {
            population: 4.3e8,
            birth_rate: 15.5,
            birth_rate_delta: -0.2,
            life_expectancy: 75.5,
            life_expectancy_delta: 0.2,
            gdp_capita: 14_500.0,
            gdp_capita_multiplier: 0.02,
            happiness: 6.2,
            food_index: 6.8,
            education_index: 6.0,
            tech_index: 35.0,
            tech_index_delta: 0.2,
            disease_index: 5.0,
            conflict_level: 1.5,
            corruption_index: 0.38,
            global_temp_diff_sensitivity: 1.0,
            neighbors: &[CentralAmerica, Antarctica],
            map_rect: MapRect::new(270, 320, 150, 210),
        },
        Antarctica => RegionSeed {
            population: 4_000.0,
            birth_rate: 5.0,
            birth_rate_delta: 0.0,
            life_expectancy: 80.0,
            life_expectancy_delta: 0.0,
            gdp_capita: 60_000.0,
            gdp_capita_multiplier: 0.0,
            happiness: 6.0,
            food_index: 7.0,
            education_index: 9.5,
            tech_index: 75.0,
            tech_index_delta: 0.1,
            disease_index: 1.0,
            conflict_level: 0.0,
            corruption_index: 0.05,
            global_temp_diff_sensitivity: 3.0,
            neighbors: &[SouthAmerica, Australia],
            map_rect: MapRect::new(300, 550, 600, 50),
        },
        Australia => RegionSeed {
            population: 4.2e7,
            birth_rate: 12.5,
            birth_rate_delta: -0.1,
            life_expectancy: 83.0,
            life_expectancy_delta: 0.1,
            gdp_capita: 50_000.0,
            gdp_capita_multiplier: 0.02,
            happiness: 7.2,
            food_index: 9.0,
            education_index: 8.5,
            tech_index: 72.0,
            tech_index_delta: 0.3,
            disease_index: 2.5,
            conflict_level: 0.2,
            corruption_index: 0.1,
            global_temp_diff_sensitivity: 1.4,
            neighbors: &[Asia, Antarctica],
            map_rect: MapRect::new(900, 380, 160, 120),
        },
        Russia => RegionSeed {
            population: 1.45e8,
            birth_rate: 10.0,
            birth_rate_delta: -0.2,
            life_expectancy: 72.5,
            life_expectancy_delta: 0.2,
            gdp_capita: 27_000.0,
            gdp_capita_multiplier: 0.015,
            happiness: 5.5,
            food_index: 7.5,
            education_index: 7.5,
            tech_index: 55.0,
            tech_index_delta: 0.2,
            disease_index: 4.0,
            conflict_level: 1.5,
            corruption_index: 0.5,
            global_temp_diff_sensitivity: 1.5,
            neighbors: &[Europe, Asia, NorthAmerica],
            map_rect: MapRect::new(700, 40, 380, 120),
        },
    }
}

/// Build the day-0 state of one region
pub fn seed_region(name: RegionName) -> RegionState {
    let seed = seed_for(name);

    let region = RegionState {
        name,
        original_population: seed.population,
        total_population: seed.population,
        birth_rate: seed.birth_rate,
        birth_rate_delta: seed.birth_rate_delta,
        life_expectancy: seed.life_expectancy,
        life_expectancy_delta: seed.life_expectancy_delta,
        gdp_capita: seed.gdp_capita,
        gdp_capita_multiplier: seed.gdp_capita_multiplier,
        happiness: seed.happiness,
        happiness_delta: 0.0,
        food_index: seed.food_index,
        finance_index: finance_index(seed.gdp_capita),
        education_index: seed.education_index,
        tech_index: seed.tech_index,
        tech_index_delta: seed.tech_index_delta,
        disease_index: seed.disease_index,
        conflict_level: seed.conflict_level,
        corruption_index: seed.corruption_index,
        global_temp_diff_sensitivity: seed.global_temp_diff_sensitivity,
        neighbors: seed.neighbors.to_vec(),
        map_rect: seed.map_rect,
    };

    clamp_region(&region)
}

/// Build the day-0 world
pub fn initial_world(config: &EngineConfig) -> WorldState {
    WorldState {
        day: 0,
        game_speed: config.initial_game_speed,
        global_budget: config.initial_budget,
        co2ppm: config.co2_ppm,
        co2ppm_delta: config.co2_ppm_delta,
        global_temp_diff: config.global_temp_diff,
        global_temp_diff_delta: config.global_temp_diff_delta,
        regions: RegionName::ALL.into_iter().map(seed_region).collect(),
        selected_region_name: None,
    }
}
