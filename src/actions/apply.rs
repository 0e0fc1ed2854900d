//! Applying interventions to the selected region

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::actions::catalog::{Intervention, InterventionId};
use crate::core::types::RegionName;
use crate::world::state::{with_region, WorldState};

/// Why an intervention was declined. None of these are errors: the world is
/// returned unchanged and the UI reports the refusal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rejection {
    NoSelection,
    UnknownRegion(RegionName),
    InsufficientFunds { cost: f64, budget: f64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoSelection => write!(f, "no region selected"),
            Rejection::UnknownRegion(name) => write!(f, "{} is not part of this world", name),
            Rejection::InsufficientFunds { cost, budget } => {
                write!(f, "costs {:.0} but only {:.0} is available", cost, budget)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InterventionOutcome {
    Applied {
        intervention: InterventionId,
        region: RegionName,
        cost: f64,
    },
    Rejected {
        intervention: InterventionId,
        reason: Rejection,
    },
}

impl InterventionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, InterventionOutcome::Applied { .. })
    }
}

/// Apply one intervention to the selected region, paying from the global budget
pub fn apply_intervention(
    world: &WorldState,
    intervention: &Intervention,
) -> (WorldState, InterventionOutcome) {
    let reject = |reason: Rejection| {
        tracing::warn!("Intervention {} rejected: {}", intervention.id, reason);
        (
            world.clone(),
            InterventionOutcome::Rejected {
                intervention: intervention.id.clone(),
                reason,
            },
        )
    };

    let Some(name) = world.selected_region_name else {
        return reject(Rejection::NoSelection);
    };
    let Some(region) = world.region(name) else {
        return reject(Rejection::UnknownRegion(name));
    };

    let cost = intervention.cost(region);
    // NaN costs fail this comparison and are declined as well
    if !(cost <= world.global_budget) {
        return reject(Rejection::InsufficientFunds {
            cost,
            budget: world.global_budget,
        });
    }

    let mut next = with_region(world, intervention.apply(region));
    next.global_budget -= cost;

    tracing::info!(
        intervention = %intervention.id,
        region = %name,
        cost,
        budget = next.global_budget,
        "Intervention applied"
    );

    (
        next,
        InterventionOutcome::Applied {
            intervention: intervention.id.clone(),
            region: name,
            cost,
        },
    )
}

/// Apply interventions in order, each one seeing the previous one's result
pub fn apply_queued(
    world: &WorldState,
    interventions: &[Intervention],
) -> (WorldState, Vec<InterventionOutcome>) {
    let mut current = world.clone();
    let mut outcomes = Vec::with_capacity(interventions.len());

    for intervention in interventions {
        let (next, outcome) = apply_intervention(&current, intervention);
        current = next;
        outcomes.push(outcome);
    }

    (current, outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::catalog::InterventionCatalog;
    use crate::actions::formula::{CostFormula, EffectFormula};
    use crate::core::config::EngineConfig;
    use crate::world::region::RegionField;
    use crate::world::seed::initial_world;
    use crate::world::state::select_region;

    fn priced(amount: f64) -> Intervention {
        Intervention {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            additional_description: String::new(),
            cost: CostFormula::Fixed { amount },
            effects: vec![EffectFormula::Adjust { field: RegionField::Happiness, amount: 0.5 }],
        }
    }

    fn selected_world(budget: f64) -> WorldState {
        let mut world = initial_world(&EngineConfig::default());
        world.global_budget = budget;
        select_region(&world, Some(RegionName::Asia))
    }

    #[test]
    fn test_insufficient_funds_changes_nothing() {
        let world = selected_world(100.0);
        let (next, outcome) = apply_intervention(&world, &priced(1000.0));
        assert_eq!(next, world);
        assert_eq!(
            outcome,
            InterventionOutcome::Rejected {
                intervention: "test".into(),
                reason: Rejection::InsufficientFunds { cost: 1000.0, budget: 100.0 },
            }
        );
    }

    #[test]
    fn test_exact_budget_is_enough() {
        let world = selected_world(1000.0);
        let (next, outcome) = apply_intervention(&world, &priced(1000.0));
        assert!(outcome.is_applied());
        assert_eq!(next.global_budget, 0.0);
    }

    #[test]
    fn test_no_selection_is_noop() {
        let mut world = selected_world(1e6);
        world.selected_region_name = None;
        let (next, outcome) = apply_intervention(&world, &priced(1.0));
        assert_eq!(next, world);
        assert!(matches!(
            outcome,
            InterventionOutcome::Rejected { reason: Rejection::NoSelection, .. }
        ));
    }

    #[test]
    fn test_selected_region_missing_from_world_is_noop() {
        let mut world = selected_world(1e6);
        world.regions.retain(|r| r.name != RegionName::Asia);
        let (next, outcome) = apply_intervention(&world, &priced(1.0));
        assert_eq!(next, world);
        assert!(matches!(
            outcome,
            InterventionOutcome::Rejected { reason: Rejection::UnknownRegion(RegionName::Asia), .. }
        ));
    }

    #[test]
    fn test_nan_cost_is_declined() {
        let world = selected_world(1e6);
        let (next, outcome) = apply_intervention(&world, &priced(f64::NAN));
        assert_eq!(next, world);
        assert!(!outcome.is_applied());
    }

    #[test]
    fn test_applied_changes_only_selected_region() {
        let world = selected_world(1e6);
        let (next, outcome) = apply_intervention(&world, &priced(10.0));
        assert_eq!(
            outcome,
            InterventionOutcome::Applied { intervention: "test".into(), region: RegionName::Asia, cost: 10.0 }
        );
        assert_eq!(next.global_budget, 1e6 - 10.0);
        for (before, after) in world.regions.iter().zip(&next.regions) {
            if before.name == RegionName::Asia {
                assert!((after.happiness - before.happiness - 0.5).abs() < 1e-12);
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_queued_interventions_chain() {
        let world = selected_world(25.0);
        let queue = vec![priced(10.0), priced(10.0), priced(10.0)];
        let (next, outcomes) = apply_queued(&world, &queue);

        let applied = outcomes.iter().filter(|o| o.is_applied()).count();
        assert_eq!(applied, 2);
        assert!(!outcomes[2].is_applied());
        assert_eq!(next.global_budget, 5.0);

        let before = world.region(RegionName::Asia).unwrap().happiness;
        let after = next.region(RegionName::Asia).unwrap().happiness;
        assert!((after - (before + 1.0).min(10.0)).abs() < 1e-12);
    }

    #[test]
    fn test_cost_reads_updated_region() {
        let catalog = InterventionCatalog::with_defaults();
        let reform = catalog.get(&"education_reform".into()).unwrap().clone();
        let world = selected_world(1e15);

        let (once, first) = apply_intervention(&world, &reform);
        let (_, second) = apply_intervention(&once, &reform);
        match (first, second) {
            (
                InterventionOutcome::Applied { cost: c1, .. },
                InterventionOutcome::Applied { cost: c2, .. },
            ) => assert!(c2 > c1),
            other => panic!("expected two applications, got {:?}", other),
        }
    }
}
