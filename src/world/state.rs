//! WorldState - the immutable snapshot threaded through the tick loop

use serde::{Deserialize, Serialize};

use crate::core::calendar::Day;
use crate::core::types::RegionName;
use crate::world::region::RegionState;

/// Complete simulation state for one day. Operations return a new value
/// instead of mutating the caller's copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldState {
    pub day: Day,
    /// Simulated days per `ms_per_day` of real time; 0 pauses
    pub game_speed: u32,
    pub global_budget: f64,

    pub co2ppm: f64,
    pub co2ppm_delta: f64,
    pub global_temp_diff: f64,
    pub global_temp_diff_delta: f64,

    /// One entry per `RegionName`, in `RegionName::ALL` order
    pub regions: Vec<RegionState>,
    pub selected_region_name: Option<RegionName>,
}

impl WorldState {
    /// Look up a region by name
    pub fn region(&self, name: RegionName) -> Option<&RegionState> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Look up a region by its display name; unknown names are simply absent
    pub fn region_by_str(&self, name: &str) -> Option<&RegionState> {
        let name = name.parse::<RegionName>().ok()?;
        self.region(name)
    }

    pub fn selected_region(&self) -> Option<&RegionState> {
        self.selected_region_name.and_then(|name| self.region(name))
    }

    pub fn total_population(&self) -> f64 {
        self.regions.iter().map(|r| r.total_population).sum()
    }

    /// Population-weighted mean happiness
    pub fn average_happiness(&self) -> f64 {
        let population = self.total_population();
        if population <= 0.0 {
            return 0.0;
        }
        self.regions
            .iter()
            .map(|r| r.happiness * r.total_population)
            .sum::<f64>()
            / population
    }

    pub fn is_paused(&self) -> bool {
        self.game_speed == 0
    }
}

/// Free-function form of `WorldState::region`
pub fn get_region_by_name(world: &WorldState, name: RegionName) -> Option<&RegionState> {
    world.region(name)
}

/// Change the selection. Selecting a region the world does not contain
/// leaves the world unchanged.
pub fn select_region(world: &WorldState, name: Option<RegionName>) -> WorldState {
    if let Some(name) = name {
        if world.region(name).is_none() {
            return world.clone();
        }
    }
    WorldState {
        selected_region_name: name,
        ..world.clone()
    }
}

pub fn select_region_by_str(world: &WorldState, name: &str) -> WorldState {
    match name.parse::<RegionName>() {
        Ok(name) => select_region(world, Some(name)),
        Err(_) => world.clone(),
    }
}

/// Replace the region with the same name; unknown regions are ignored
pub fn with_region(world: &WorldState, region: RegionState) -> WorldState {
    let mut next = world.clone();
    if let Some(slot) = next.regions.iter_mut().find(|r| r.name == region.name) {
        *slot = region;
    }
    next
}

pub fn set_game_speed(world: &WorldState, game_speed: u32) -> WorldState {
    WorldState {
        game_speed,
        ..world.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use crate::world::seed::initial_world;

    #[test]
    fn test_lookup_by_name() {
        let world = initial_world(&EngineConfig::default());
        let europe = get_region_by_name(&world, RegionName::Europe).unwrap();
        assert_eq!(europe.name, RegionName::Europe);
        assert_eq!(world.region_by_str("South America").unwrap().name, RegionName::SouthAmerica);
        assert!(world.region_by_str("Atlantis").is_none());
    }

    #[test]
    fn test_lookup_missing_region_is_absent() {
        let mut world = initial_world(&EngineConfig::default());
        world.regions.retain(|r| r.name != RegionName::Antarctica);
        assert!(world.region(RegionName::Antarctica).is_none());
    }

    #[test]
    fn test_select_unknown_name_is_noop() {
        let world = initial_world(&EngineConfig::default());
        let selected = select_region_by_str(&world, "Asia");
        assert_eq!(selected.selected_region_name, Some(RegionName::Asia));

        let unchanged = select_region_by_str(&selected, "Mars");
        assert_eq!(unchanged, selected);

        let cleared = select_region(&selected, None);
        assert!(cleared.selected_region().is_none());
    }

    #[test]
    fn test_with_region_replaces_in_place() {
        let world = initial_world(&EngineConfig::default());
        let mut asia = world.region(RegionName::Asia).unwrap().clone();
        asia.happiness = 9.0;
        let next = with_region(&world, asia);
        assert_eq!(next.region(RegionName::Asia).unwrap().happiness, 9.0);
        assert_eq!(next.regions[1].name, RegionName::Asia);
        assert_eq!(world.region(RegionName::Asia).unwrap().happiness, world.regions[1].happiness);
    }

    #[test]
    fn test_pause_via_game_speed() {
        let world = initial_world(&EngineConfig::default());
        assert!(!world.is_paused());
        assert!(set_game_speed(&world, 0).is_paused());
    }

    #[test]
    fn test_average_happiness_is_weighted() {
        let world = initial_world(&EngineConfig::default());
        let avg = world.average_happiness();
        let min = world.regions.iter().map(|r| r.happiness).fold(f64::INFINITY, f64::min);
        let max = world.regions.iter().map(|r| r.happiness).fold(f64::NEG_INFINITY, f64::max);
        assert!(avg >= min && avg <= max);
    }
}
