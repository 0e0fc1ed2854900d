//! Cost and effect formulas of interventions
//!
//! Formulas are plain data so the catalog can be written in TOML and
//! serialized alongside the world. Both read only the target region.

use serde::{Deserialize, Serialize};

use crate::world::region::{RegionField, RegionState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostFormula {
    /// Same price everywhere
    Fixed { amount: f64 },
    /// Scales with the size of the regional economy: GDP per capita times
    /// population, divided by `divisor`
    Economy { divisor: f64 },
    /// `max(field, 0) ^ exponent * scale`, so improving an already high
    /// index gets more expensive
    IndexPower {
        field: RegionField,
        exponent: f64,
        scale: f64,
    },
}

impl CostFormula {
    pub fn evaluate(&self, region: &RegionState) -> f64 {
        match self {
            CostFormula::Fixed { amount } => *amount,
            CostFormula::Economy { divisor } => {
                region.gdp_capita * region.total_population / divisor
            }
            CostFormula::IndexPower { field, exponent, scale } => {
                field.get(region).max(0.0).powf(*exponent) * scale
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectFormula {
    /// `field += amount`
    Adjust { field: RegionField, amount: f64 },
    /// `field *= factor`
    Scale { field: RegionField, factor: f64 },
    /// `field += amount * (1 - corruption)`: aid that partly disappears
    CorruptibleAdjust { field: RegionField, amount: f64 },
}

impl EffectFormula {
    pub fn field(&self) -> RegionField {
        match self {
            EffectFormula::Adjust { field, .. }
            | EffectFormula::Scale { field, .. }
            | EffectFormula::CorruptibleAdjust { field, .. } => *field,
        }
    }

    /// Write the effect into `region`, touching only `self.field()`
    pub fn apply_to(&self, region: &mut RegionState) {
        let field = self.field();
        let current = field.get(region);
        let value = match self {
            EffectFormula::Adjust { amount, .. } => current + amount,
            EffectFormula::Scale { factor, .. } => current * factor,
            EffectFormula::CorruptibleAdjust { amount, .. } => {
                current + amount * (1.0 - region.corruption_index)
            }
        };
        field.set(region, value);
    }
}
