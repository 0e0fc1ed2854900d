//! Bounds policy - saturating clamp of every indicator to its legal range

use crate::world::region::{RegionField, RegionState};

/// Clamp a single value to a field's range. NaN passes through unchanged so
/// that `RegionState::validate` can report it.
pub fn clamp_field(field: RegionField, value: f64) -> f64 {
    let (min, max) = field.bounds();
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Apply the clamp table to every numeric field of a region
pub fn clamp_region(region: &RegionState) -> RegionState {
    let mut clamped = region.clone();
    for field in RegionField::ALL {
        field.set(&mut clamped, clamp_field(field, field.get(region)));
    }
    clamped
}

/// Fields whose value currently lies outside their range
pub fn out_of_bounds(region: &RegionState) -> Vec<RegionField> {
    RegionField::ALL
        .into_iter()
        .filter(|field| {
            let (min, max) = field.bounds();
            let value = field.get(region);
            value < min || value > max
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RegionName;
    use crate::world::seed::seed_region;

    #[test]
    fn test_clamp_saturates_both_ends() {
        assert_eq!(clamp_field(RegionField::Happiness, -3.0), 0.0);
        assert_eq!(clamp_field(RegionField::Happiness, 11.0), 10.0);
        assert_eq!(clamp_field(RegionField::Happiness, 5.5), 5.5);
        assert_eq!(clamp_field(RegionField::GdpCapita, 10.0), 827.0);
        assert_eq!(clamp_field(RegionField::TotalPopulation, 2e10), 1e10);
    }

    #[test]
    fn test_clamp_leaves_nan_for_validation() {
        assert!(clamp_field(RegionField::FoodIndex, f64::NAN).is_nan());
    }

    #[test]
    fn test_clamp_region_fixes_every_out_of_range_field() {
        let mut region = seed_region(RegionName::Africa);
        region.conflict_level = 42.0;
        region.corruption_index = -0.5;
        region.life_expectancy = 3.0;
        assert_eq!(out_of_bounds(&region).len(), 3);

        let clamped = clamp_region(&region);
        assert!(out_of_bounds(&clamped).is_empty());
        assert_eq!(clamped.conflict_level, 10.0);
        assert_eq!(clamped.corruption_index, 0.0);
        assert_eq!(clamped.life_expectancy, 15.0);
    }

    #[test]
    fn test_clamp_keeps_passthrough_data() {
        let mut region = seed_region(RegionName::Russia);
        region.original_population = 5.0;
        let clamped = clamp_region(&region);
        assert_eq!(clamped.original_population, 5.0);
        assert_eq!(clamped.neighbors, region.neighbors);
        assert_eq!(clamped.map_rect, region.map_rect);
    }
}
