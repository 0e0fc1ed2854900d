//! RegionState - demographic and socioeconomic indicators of one continent section

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{MapRect, RegionName};

/// Indicators of one region. "Delta" fields are yearly rates of change of
/// their primary field and are themselves updated every day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionState {
    pub name: RegionName,

    // Demographics
    /// Population at simulation start; never zero
    pub original_population: f64,
    pub total_population: f64,
    /// Births per 1000 inhabitants per year
    pub birth_rate: f64,
    pub birth_rate_delta: f64,
    pub life_expectancy: f64,
    pub life_expectancy_delta: f64,

    // Economy
    /// PPP-adjusted GDP per capita
    #[serde(rename = "GDPCapita")]
    pub gdp_capita: f64,
    /// Fractional yearly GDP growth
    #[serde(rename = "GDPCapitaMultiplier")]
    pub gdp_capita_multiplier: f64,

    // Wellbeing
    pub happiness: f64,
    pub happiness_delta: f64,
    pub food_index: f64,
    /// Derived from GDP per capita
    pub finance_index: f64,
    pub education_index: f64,
    pub tech_index: f64,
    pub tech_index_delta: f64,
    pub disease_index: f64,
    pub conflict_level: f64,
    /// Fraction of aid lost to corruption
    pub corruption_index: f64,
    pub global_temp_diff_sensitivity: f64,

    pub neighbors: Vec<RegionName>,
    pub map_rect: MapRect,
}

/// Numeric region fields, with the legal range each one is clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionField {
    TotalPopulation,
    BirthRate,
    BirthRateDelta,
    LifeExpectancy,
    LifeExpectancyDelta,
    #[serde(rename = "GDPCapita")]
    GdpCapita,
    #[serde(rename = "GDPCapitaMultiplier")]
    GdpCapitaMultiplier,
    Happiness,
    HappinessDelta,
    FoodIndex,
    FinanceIndex,
    EducationIndex,
    TechIndex,
    TechIndexDelta,
    DiseaseIndex,
    ConflictLevel,
    CorruptionIndex,
    GlobalTempDiffSensitivity,
}

pub const MAX_POPULATION: f64 = 1e10;

impl RegionField {
    pub const ALL: [RegionField; 18] = [
        RegionField::TotalPopulation,
        RegionField::BirthRate,
        RegionField::BirthRateDelta,
        RegionField::LifeExpectancy,
        RegionField::LifeExpectancyDelta,
        RegionField::GdpCapita,
        RegionField::GdpCapitaMultiplier,
        RegionField::Happiness,
        RegionField::HappinessDelta,
        RegionField::FoodIndex,
        RegionField::FinanceIndex,
        RegionField::EducationIndex,
        RegionField::TechIndex,
        RegionField::TechIndexDelta,
        RegionField::DiseaseIndex,
        RegionField::ConflictLevel,
        RegionField::CorruptionIndex,
        RegionField::GlobalTempDiffSensitivity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RegionField::TotalPopulation => "totalPopulation",
            RegionField::BirthRate => "birthRate",
            RegionField::BirthRateDelta => "birthRateDelta",
            RegionField::LifeExpectancy => "lifeExpectancy",
            RegionField::LifeExpectancyDelta => "lifeExpectancyDelta",
            RegionField::GdpCapita => "GDPCapita",
            RegionField::GdpCapitaMultiplier => "GDPCapitaMultiplier",
            RegionField::Happiness => "happiness",
            RegionField::HappinessDelta => "happinessDelta",
            RegionField::FoodIndex => "foodIndex",
            RegionField::FinanceIndex => "financeIndex",
            RegionField::EducationIndex => "educationIndex",
            RegionField::TechIndex => "techIndex",
            RegionField::TechIndexDelta => "techIndexDelta",
            RegionField::DiseaseIndex => "diseaseIndex",
            RegionField::ConflictLevel => "conflictLevel",
            RegionField::CorruptionIndex => "corruptionIndex",
            RegionField::GlobalTempDiffSensitivity => "globalTempDiffSensitivity",
        }
    }

    /// Inclusive (min, max) range enforced after every daily update
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            RegionField::TotalPopulation => (0.0, MAX_POPULATION),
            RegionField::BirthRate => (0.0, 200.0),
            RegionField::BirthRateDelta => (-10.0, 10.0),
            RegionField::LifeExpectancy => (15.0, 250.0),
            RegionField::LifeExpectancyDelta => (-10.0, 50.0),
            RegionField::GdpCapita => (827.0, 1e12),
            RegionField::GdpCapitaMultiplier => (-0.4, 0.8),
            RegionField::Happiness => (0.0, 10.0),
            RegionField::HappinessDelta => (-6.0, 6.0),
            RegionField::FoodIndex => (0.0, 10.0),
            RegionField::FinanceIndex => (0.0, 10.0),
            RegionField::EducationIndex => (0.0, 10.0),
            RegionField::TechIndex => (0.0, 100.0),
            RegionField::TechIndexDelta => (-5.0, 50.0),
            RegionField::DiseaseIndex => (0.0, 100.0),
            RegionField::ConflictLevel => (0.0, 10.0),
            RegionField::CorruptionIndex => (0.0, 1.0),
            RegionField::GlobalTempDiffSensitivity => (-5.0, 5.0),
        }
    }

    pub fn get(&self, region: &RegionState) -> f64 {
        match self {
            RegionField::TotalPopulation => region.total_population,
            RegionField::BirthRate => region.birth_rate,
            RegionField::BirthRateDelta => region.birth_rate_delta,
            RegionField::LifeExpectancy => region.life_expectancy,
            RegionField::LifeExpectancyDelta => region.life_expectancy_delta,
            RegionField::GdpCapita => region.gdp_capita,
            RegionField::GdpCapitaMultiplier => region.gdp_capita_multiplier,
            RegionField::Happiness => region.happiness,
            RegionField::HappinessDelta => region.happiness_delta,
            RegionField::FoodIndex => region.food_index,
            RegionField::FinanceIndex => region.finance_index,
            RegionField::EducationIndex => region.education_index,
            RegionField::TechIndex => region.tech_index,
            RegionField::TechIndexDelta => region.tech_index_delta,
            RegionField::DiseaseIndex => region.disease_index,
            RegionField::ConflictLevel => region.conflict_level,
            RegionField::CorruptionIndex => region.corruption_index,
            RegionField::GlobalTempDiffSensitivity => region.global_temp_diff_sensitivity,
        }
    }

    pub fn set(&self, region: &mut RegionState, value: f64) {
        let slot = match self {
            RegionField::TotalPopulation => &mut region.total_population,
            RegionField::BirthRate => &mut region.birth_rate,
            RegionField::BirthRateDelta => &mut region.birth_rate_delta,
            RegionField::LifeExpectancy => &mut region.life_expectancy,
            RegionField::LifeExpectancyDelta => &mut region.life_expectancy_delta,
            RegionField::GdpCapita => &mut region.gdp_capita,
            RegionField::GdpCapitaMultiplier => &mut region.gdp_capita_multiplier,
            RegionField::Happiness => &mut region.happiness,
            RegionField::HappinessDelta => &mut region.happiness_delta,
            RegionField::FoodIndex => &mut region.food_index,
            RegionField::FinanceIndex => &mut region.finance_index,
            RegionField::EducationIndex => &mut region.education_index,
            RegionField::TechIndex => &mut region.tech_index,
            RegionField::TechIndexDelta => &mut region.tech_index_delta,
            RegionField::DiseaseIndex => &mut region.disease_index,
            RegionField::ConflictLevel => &mut region.conflict_level,
            RegionField::CorruptionIndex => &mut region.corruption_index,
            RegionField::GlobalTempDiffSensitivity => &mut region.global_temp_diff_sensitivity,
        };
        *slot = value;
    }
}

impl RegionState {
    pub fn population_ratio(&self) -> f64 {
        self.total_population / self.original_population
    }

    pub fn is_neighbor(&self, other: RegionName) -> bool {
        self.neighbors.contains(&other)
    }

    /// Report the first NaN or infinite indicator
    ///
    /// Clamping cannot repair these, so they surface as errors instead.
    pub fn validate(&self) -> Result<()> {
        match self.non_finite_fields().first() {
            Some(field) => Err(SimError::NonFinite {
                region: self.name.to_string(),
                field: field.name(),
                value: field.get(self),
            }),
            None => Ok(()),
        }
    }

    /// Every field holding NaN or an infinity, in `RegionField::ALL` order
    pub fn non_finite_fields(&self) -> Vec<RegionField> {
        RegionField::ALL
            .into_iter()
            .filter(|field| !field.get(self).is_finite())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::seed::seed_region;

    #[test]
    fn test_get_set_touch_only_their_field() {
        let region = seed_region(RegionName::Europe);
        for field in RegionField::ALL {
            let mut changed = region.clone();
            field.set(&mut changed, 1234.5);
            assert_eq!(field.get(&changed), 1234.5);
            for other in RegionField::ALL.iter().filter(|f| **f != field) {
                assert_eq!(other.get(&changed), other.get(&region), "{} leaked into {}", field.name(), other.name());
            }
        }
    }

    #[test]
    fn test_bounds_are_ordered() {
        for field in RegionField::ALL {
            let (min, max) = field.bounds();
            assert!(min < max, "{} has inverted bounds", field.name());
        }
    }

    #[test]
    fn test_validate_reports_nan_field() {
        let mut region = seed_region(RegionName::Asia);
        region.happiness = f64::NAN;
        match region.validate() {
            Err(SimError::NonFinite { region, field, .. }) => {
                assert_eq!(region, "Asia");
                assert_eq!(field, "happiness");
            }
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_fields_lists_all() {
        let mut region = seed_region(RegionName::Asia);
        assert!(region.non_finite_fields().is_empty());
        region.food_index = f64::INFINITY;
        region.happiness = f64::NAN;
        assert_eq!(
            region.non_finite_fields(),
            vec![RegionField::Happiness, RegionField::FoodIndex]
        );
    }

    #[test]
    fn test_validate_accepts_seed() {
        for name in RegionName::ALL {
            assert!(seed_region(name).validate().is_ok());
        }
    }

    #[test]
    fn test_region_serializes_with_indicator_names() {
        let json = serde_json::to_value(seed_region(RegionName::Africa)).unwrap();
        assert!(json.get("GDPCapita").is_some());
        assert!(json.get("totalPopulation").is_some());
        assert!(json.get("globalTempDiffSensitivity").is_some());
    }
}
