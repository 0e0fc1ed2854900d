//! Tick scheduler - turns elapsed real time into simulated days
//!
//! Each tick first drains the intervention queue against the selected
//! region, then advances as many days as the accumulated time allows.
//! Interventions are processed even while the game is paused.

use std::collections::VecDeque;

use crate::actions::apply::{apply_intervention, InterventionOutcome};
use crate::actions::catalog::{InterventionCatalog, InterventionId};
use crate::core::calendar::Day;
use crate::core::config::EngineConfig;
use crate::simulation::events::NewsKind;
use crate::simulation::world_update::advance_day_reporting;
use crate::world::state::WorldState;

/// Result of one scheduler tick
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub world: WorldState,
    pub outcomes: Vec<InterventionOutcome>,
    /// News produced this tick, tagged with the day they happened on
    pub events: Vec<(Day, NewsKind)>,
    pub days_advanced: u32,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    config: EngineConfig,
    accumulated_ms: u64,
    queue: VecDeque<InterventionId>,
}

impl Scheduler {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            accumulated_ms: 0,
            queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Queue an intervention for the next tick
    pub fn queue_intervention(&mut self, id: InterventionId) {
        self.queue.push_back(id);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    pub fn tick(
        &mut self,
        world: &WorldState,
        elapsed_ms: u64,
        catalog: &InterventionCatalog,
    ) -> TickOutcome {
        self.tick_capped(world, elapsed_ms, catalog, u64::MAX)
    }

    /// Like `tick`, but advances at most `max_days` days. Time owed beyond
    /// the cap stays in the accumulator for the following ticks.
    pub fn tick_capped(
        &mut self,
        world: &WorldState,
        elapsed_ms: u64,
        catalog: &InterventionCatalog,
        max_days: u64,
    ) -> TickOutcome {
        let mut current = world.clone();
        let mut outcomes = Vec::new();
        let mut events = Vec::new();

        while let Some(id) = self.queue.pop_front() {
            let Some(intervention) = catalog.get(&id) else {
                tracing::warn!("Queued intervention {} is not in the catalog", id);
                events.push((current.day, NewsKind::UnknownIntervention { intervention: id }));
                continue;
            };

            let (next, outcome) = apply_intervention(&current, intervention);
            current = next;
            events.push((current.day, news_for(&outcome)));
            outcomes.push(outcome);
        }

        let days = self.days_due(elapsed_ms, current.game_speed, max_days);
        for _ in 0..days {
            let (next, reports) = advance_day_reporting(&current);
            current = next;
            events.push((current.day, NewsKind::DayAdvanced));

            for report in reports {
                events.push((
                    current.day,
                    NewsKind::NonFiniteIndicator {
                        region: report.region,
                        field: report.field.name().to_string(),
                    },
                ));
            }
        }

        TickOutcome {
            world: current,
            outcomes,
            events,
            days_advanced: days,
        }
    }

    /// Accumulate elapsed time and take out the whole days it covers,
    /// at most `limit` of them
    fn days_due(&mut self, elapsed_ms: u64, game_speed: u32, limit: u64) -> u32 {
        if game_speed == 0 {
            return 0;
        }

        let scaled = elapsed_ms.saturating_mul(game_speed as u64);
        self.accumulated_ms = self.accumulated_ms.saturating_add(scaled);

        let ms_per_day = self.config.ms_per_day;
        let cap = self.config.max_days_per_tick as u64;
        let mut due = self.accumulated_ms / ms_per_day;
        if due > cap {
            tracing::debug!("Dropping {} days of backlog", due - cap);
            self.accumulated_ms = cap * ms_per_day;
            due = cap;
        }

        let days = due.min(limit);
        self.accumulated_ms -= days * ms_per_day;
        days as u32
    }
}

fn news_for(outcome: &InterventionOutcome) -> NewsKind {
    match outcome {
        InterventionOutcome::Applied { intervention, region, cost } => {
            NewsKind::InterventionApplied {
                intervention: intervention.clone(),
                region: *region,
                cost: *cost,
            }
        }
        InterventionOutcome::Rejected { intervention, reason } => {
            NewsKind::InterventionRejected {
                intervention: intervention.clone(),
                reason: reason.clone(),
            }
        }
    }
}
