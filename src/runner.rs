//! Headless run loop shared by the binary and the integration tests
//!
//! Frames of fixed length drive the scheduler until the requested day is
//! reached. Ticks are capped so a run never goes past its last day and
//! never jumps over an autoplay day.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use crate::actions::catalog::InterventionCatalog;
use crate::core::calendar::Day;
use crate::core::config::EngineConfig;
use crate::core::types::RegionName;
use crate::output::{RunStats, RunSummary};
use crate::simulation::events::NewsLog;
use crate::simulation::scheduler::Scheduler;
use crate::world::seed::initial_world;
use crate::world::state::{select_region, set_game_speed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub days: Day,
    pub speed: u32,
    pub frame_ms: u64,
    /// Queue a random intervention on a random region every N days
    pub autoplay_every: Option<u64>,
    pub seed: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            days: 365,
            speed: 1,
            frame_ms: 16,
            autoplay_every: None,
            seed: 2020,
        }
    }
}

/// Run from the seed world until `options.days` days have passed
pub fn run_headless(
    config: &EngineConfig,
    catalog: &InterventionCatalog,
    options: &RunOptions,
) -> RunSummary {
    let start = set_game_speed(&initial_world(config), options.speed);
    let mut world = start.clone();
    let mut scheduler = Scheduler::new(config.clone());
    let mut news = NewsLog::new(config.news_capacity);
    let mut stats = RunStats::starting_from(&start);
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let ids = catalog.ids();
    let autoplay_every = options.autoplay_every.filter(|n| *n > 0);
    let mut last_autoplay_day = None;

    let started = Instant::now();
    while world.day < options.days {
        if let Some(every) = autoplay_every {
            if world.day % every == 0 && last_autoplay_day != Some(world.day) {
                last_autoplay_day = Some(world.day);
                if let (Some(region), Some(id)) =
                    (RegionName::ALL.choose(&mut rng), ids.choose(&mut rng))
                {
                    world = select_region(&world, Some(*region));
                    scheduler.queue_intervention(id.clone());
                }
            }
        }

        let max_days = days_until_stop(world.day, options.days, autoplay_every);
        let tick = scheduler.tick_capped(&world, options.frame_ms, catalog, max_days);
        for outcome in &tick.outcomes {
            stats.record(outcome);
        }
        news.extend(tick.events);
        world = tick.world;
    }

    RunSummary::new(&start, world, news, stats, started.elapsed())
}

/// Days the next tick may advance: up to the end of the run or the next
/// autoplay day, whichever comes first
fn days_until_stop(day: Day, last_day: Day, autoplay_every: Option<u64>) -> u64 {
    let remaining = last_day.saturating_sub(day);
    match autoplay_every {
        Some(every) => remaining.min(every - day % every),
        None => remaining,
    }
}
