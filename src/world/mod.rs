//! World state: regions, their legal ranges and the day-0 seed

pub mod bounds;
pub mod region;
pub mod seed;
pub mod state;

pub use bounds::{clamp_field, clamp_region, out_of_bounds};
pub use region::{RegionField, RegionState, MAX_POPULATION};
pub use seed::{initial_world, seed_region};
pub use state::{
    get_region_by_name, select_region, select_region_by_str, set_game_speed, with_region,
    WorldState,
};
