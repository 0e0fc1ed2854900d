//! Intervention definitions and catalog

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::actions::formula::{CostFormula, EffectFormula};
use crate::world::bounds::clamp_field;
use crate::world::region::{RegionField, RegionState};

/// Stable identifier of an intervention, e.g. `education_reform`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterventionId(pub String);

impl InterventionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InterventionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for InterventionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A costed action the player can apply to the selected region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: InterventionId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub additional_description: String,
    pub cost: CostFormula,
    pub effects: Vec<EffectFormula>,
}

impl Intervention {
    pub fn cost(&self, region: &RegionState) -> f64 {
        self.cost.evaluate(region)
    }

    /// Region after the intervention. Only the fields named by the effects
    /// change, and each of them is clamped to its legal range.
    pub fn apply(&self, region: &RegionState) -> RegionState {
        let mut next = region.clone();
        for effect in &self.effects {
            effect.apply_to(&mut next);
        }
        for field in self.affected_fields() {
            let clamped = clamp_field(field, field.get(&next));
            field.set(&mut next, clamped);
        }
        next
    }

    pub fn affected_fields(&self) -> Vec<RegionField> {
        let mut fields: Vec<RegionField> = Vec::new();
        for effect in &self.effects {
            if !fields.contains(&effect.field()) {
                fields.push(effect.field());
            }
        }
        fields
    }
}

/// Ordered set of interventions, in the order they are offered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterventionCatalog {
    interventions: Vec<Intervention>,
}

impl InterventionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by id, keeping the original position on replace
    pub fn add(&mut self, intervention: Intervention) {
        match self.interventions.iter_mut().find(|i| i.id == intervention.id) {
            Some(slot) => *slot = intervention,
            None => self.interventions.push(intervention),
        }
    }

    pub fn get(&self, id: &InterventionId) -> Option<&Intervention> {
        self.interventions.iter().find(|i| &i.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intervention> {
        self.interventions.iter()
    }

    pub fn ids(&self) -> Vec<InterventionId> {
        self.interventions.iter().map(|i| i.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.interventions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interventions.is_empty()
    }

    /// Built-in interventions (mirrors data/interventions.toml)
    pub fn with_defaults() -> Self {
        use RegionField::*;

        let mut catalog = Self::new();

        catalog.add(Intervention {
            id: "education_reform".into(),
            name: "Education reform".into(),
            description: "Modernise curricula and train teachers.".into(),
            additional_description: "Cost grows with the current education level.".into(),
            cost: CostFormula::IndexPower { field: EducationIndex, exponent: 2.0, scale: 2e8 },
            effects: vec![EffectFormula::Adjust { field: EducationIndex, amount: 0.3 }],
        });

        catalog.add(Intervention {
            id: "healthcare_program".into(),
            name: "Healthcare program".into(),
            description: "Vaccinations, clinics and clean water.".into(),
            additional_description: "Part of the funds is lost to corruption.".into(),
            cost: CostFormula::Economy { divisor: 2e4 },
            effects: vec![
                EffectFormula::CorruptibleAdjust { field: DiseaseIndex, amount: -1.0 },
                EffectFormula::Adjust { field: LifeExpectancyDelta, amount: 0.1 },
            ],
        });

        catalog.add(Intervention {
            id: "food_aid".into(),
            name: "Food aid".into(),
            description: "Ship grain and seed to the region.".into(),
            additional_description: "Part of the aid is lost to corruption.".into(),
            cost: CostFormula::Fixed { amount: 5e8 },
            effects: vec![EffectFormula::CorruptibleAdjust { field: FoodIndex, amount: 0.5 }],
        });

        catalog.add(Intervention {
            id: "peacekeeping_mission".into(),
            name: "Peacekeeping mission".into(),
            description: "Send a mediation and peacekeeping force.".into(),
            additional_description: "More expensive the worse the conflict.".into(),
            cost: CostFormula::IndexPower { field: ConflictLevel, exponent: 1.5, scale: 1e9 },
            effects: vec![
                EffectFormula::Adjust { field: ConflictLevel, amount: -1.0 },
                EffectFormula::Adjust { field: Happiness, amount: 0.1 },
            ],
        });

        catalog.add(Intervention {
            id: "research_grants".into(),
            name: "Research grants".into(),
            description: "Fund universities and laboratories.".into(),
            additional_description: "Rapid tech change can unsettle people.".into(),
            cost: CostFormula::IndexPower { field: TechIndex, exponent: 1.2, scale: 5e7 },
            effects: vec![EffectFormula::Adjust { field: TechIndexDelta, amount: 0.1 }],
        });

        catalog.add(Intervention {
            id: "infrastructure_investment".into(),
            name: "Infrastructure investment".into(),
            description: "Roads, ports and power grids.".into(),
            additional_description: "Cost scales with the size of the economy.".into(),
            cost: CostFormula::Economy { divisor: 1e4 },
            effects: vec![EffectFormula::Adjust { field: GdpCapitaMultiplier, amount: 0.01 }],
        });

        catalog.add(Intervention {
            id: "anti_corruption_campaign".into(),
            name: "Anti-corruption campaign".into(),
            description: "Independent auditors and courts.".into(),
            additional_description: "Cuts corruption by a fifth.".into(),
            cost: CostFormula::Fixed { amount: 2e9 },
            effects: vec![EffectFormula::Scale { field: CorruptionIndex, factor: 0.8 }],
        });

        catalog
    }
}
