//! Load the intervention catalog from TOML

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::actions::catalog::{Intervention, InterventionCatalog};
use crate::actions::formula::{CostFormula, EffectFormula};
use crate::core::error::{Result, SimError};

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    intervention: Vec<Intervention>,
}

/// Load a catalog file (`[[intervention]]` tables, in display order)
pub fn load_catalog(path: &Path) -> Result<InterventionCatalog> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

pub fn parse_catalog(content: &str) -> Result<InterventionCatalog> {
    let file: CatalogFile = toml::from_str(content)?;

    let mut seen = HashSet::new();
    let mut catalog = InterventionCatalog::new();
    for intervention in file.intervention {
        if !seen.insert(intervention.id.clone()) {
            return Err(SimError::InvalidConfig(format!(
                "duplicate intervention id {}",
                intervention.id
            )));
        }
        validate_intervention(&intervention)?;
        catalog.add(intervention);
    }

    Ok(catalog)
}

fn validate_intervention(intervention: &Intervention) -> Result<()> {
    let invalid = |msg: &str| {
        Err(SimError::InvalidConfig(format!("{}: {}", intervention.id, msg)))
    };

    match intervention.cost {
        CostFormula::Fixed { amount } if !amount.is_finite() || amount < 0.0 => {
            return invalid("fixed cost must be finite and non-negative");
        }
        CostFormula::Economy { divisor } if !divisor.is_finite() || divisor <= 0.0 => {
            return invalid("economy divisor must be positive");
        }
        CostFormula::IndexPower { exponent, scale, .. }
            if !exponent.is_finite() || !scale.is_finite() || scale < 0.0 =>
        {
            return invalid("index power needs a finite exponent and non-negative scale");
        }
        _ => {}
    }

    if intervention.effects.is_empty() {
        return invalid("at least one effect is required");
    }

    for effect in &intervention.effects {
        let value = match effect {
            EffectFormula::Adjust { amount, .. } | EffectFormula::CorruptibleAdjust { amount, .. } => {
                *amount
            }
            EffectFormula::Scale { factor, .. } => *factor,
        };
        if !value.is_finite() {
            return invalid("effect values must be finite");
        }
    }

    Ok(())
}
