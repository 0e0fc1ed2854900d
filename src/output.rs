//! Run summary and serialization

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::actions::apply::InterventionOutcome;
use crate::core::calendar::Calendar;
use crate::simulation::events::NewsLog;
use crate::world::state::WorldState;

/// Complete output of a headless run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub final_date: NaiveDate,
    pub final_world: WorldState,
    pub news: NewsLog,
    pub statistics: RunStats,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub days_simulated: u64,
    pub simulation_time_ms: u64,
    pub interventions_applied: u32,
    pub interventions_rejected: u32,
    pub budget_spent: f64,
    pub population_at_start: f64,
    pub population_at_end: f64,
    pub average_happiness_at_end: f64,
}

impl RunStats {
    /// Start counting from the given world
    pub fn starting_from(world: &WorldState) -> Self {
        Self {
            population_at_start: world.total_population(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &InterventionOutcome) {
        match outcome {
            InterventionOutcome::Applied { cost, .. } => {
                self.interventions_applied += 1;
                self.budget_spent += cost;
            }
            InterventionOutcome::Rejected { .. } => self.interventions_rejected += 1,
        }
    }
}

impl RunSummary {
    pub fn new(
        start: &WorldState,
        final_world: WorldState,
        news: NewsLog,
        mut statistics: RunStats,
        elapsed: Duration,
    ) -> Self {
        statistics.days_simulated = final_world.day.saturating_sub(start.day);
        statistics.simulation_time_ms = elapsed.as_millis() as u64;
        statistics.population_at_end = final_world.total_population();
        statistics.average_happiness_at_end = final_world.average_happiness();

        Self {
            final_date: Calendar::default().date_for_day(final_world.day),
            final_world,
            news,
            statistics,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        format!(
            "Simulated {} days (to {}) in {}ms\n{} interventions applied, {} declined, {:.0} spent\nWorld population {:.0} -> {:.0}, average happiness {:.2}",
            self.statistics.days_simulated,
            self.final_date,
            self.statistics.simulation_time_ms,
            self.statistics.interventions_applied,
            self.statistics.interventions_rejected,
            self.statistics.budget_spent,
            self.statistics.population_at_start,
            self.statistics.population_at_end,
            self.statistics.average_happiness_at_end,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::apply::Rejection;
    use crate::core::config::EngineConfig;
    use crate::core::types::RegionName;
    use crate::simulation::world_update::advance_day;
    use crate::world::seed::initial_world;
    use crate::world::state::{select_region, select_region_by_str};

    #[test]
    fn test_stats_record_outcomes() {
        let world = initial_world(&EngineConfig::default());
        let mut stats = RunStats::starting_from(&world);
        stats.record(&InterventionOutcome::Applied {
            intervention: "food_aid".into(),
            region: RegionName::Asia,
            cost: 10.0,
        });
        stats.record(&InterventionOutcome::Rejected {
            intervention: "food_aid".into(),
            reason: Rejection::NoSelection,
        });
        assert_eq!(stats.interventions_applied, 1);
        assert_eq!(stats.interventions_rejected, 1);
        assert_eq!(stats.budget_spent, 10.0);
        assert_eq!(stats.population_at_start, world.total_population());
    }

    #[test]
    fn test_summary_counts_days_and_dates() {
        let start = initial_world(&EngineConfig::default());
        let mut world = start.clone();
        for _ in 0..3 {
            world = advance_day(&world);
        }
        let summary = RunSummary::new(
            &start,
            world,
            NewsLog::new(4),
            RunStats::starting_from(&start),
            Duration::from_millis(5),
        );
        assert_eq!(summary.statistics.days_simulated, 3);
        assert_eq!(summary.final_date, NaiveDate::from_ymd_opt(2020, 1, 4).unwrap());
        assert!(summary.summary().starts_with("Simulated 3 days (to 2020-01-04)"));

        let json: serde_json::Value = serde_json::from_str(&summary.to_json()).unwrap();
        assert_eq!(json["final_world"]["day"], 3);
    }

    #[test]
    fn test_region_names_in_json_select_again() {
        let start = initial_world(&EngineConfig::default());
        let world = select_region(&start, Some(RegionName::NorthAmerica));
        let summary = RunSummary::new(
            &start,
            world,
            NewsLog::new(4),
            RunStats::starting_from(&start),
            Duration::ZERO,
        );

        let json: serde_json::Value = serde_json::from_str(&summary.to_json()).unwrap();
        let selected = json["final_world"]["selectedRegionName"].as_str().unwrap();
        assert_eq!(selected, "North America");

        let reselected = select_region_by_str(&start, selected);
        assert_eq!(reselected.selected_region_name, Some(RegionName::NorthAmerica));
    }
}
