//! Integration tests for the daily update cycle
//!
//! These run the world for simulated years and check that:
//! - the day counter and global scalars advance exactly
//! - every indicator stays inside its legal range
//! - the scheduler honours pause and game speed

use world_sim::actions::InterventionCatalog;
use world_sim::core::types::RegionName;
use world_sim::core::EngineConfig;
use world_sim::simulation::{advance_day, finance_index, NewsKind, NewsLog, Scheduler};
use world_sim::world::{initial_world, out_of_bounds, set_game_speed};

#[test]
fn test_ten_years_stay_in_bounds() {
    let mut world = initial_world(&EngineConfig::default());

    for _ in 0..3650 {
        world = advance_day(&world);
        for region in &world.regions {
            assert!(
                out_of_bounds(region).is_empty(),
                "{} left its bounds on day {}: {:?}",
                region.name,
                world.day,
                out_of_bounds(region)
            );
            assert!(region.validate().is_ok());
        }
    }

    assert_eq!(world.day, 3650);
    println!(
        "After 10 years: population {:.3e}, avg happiness {:.2}",
        world.total_population(),
        world.average_happiness()
    );
}

#[test]
fn test_global_scalars_over_one_year() {
    let start = initial_world(&EngineConfig::default());
    let mut world = start.clone();
    for _ in 0..365 {
        world = advance_day(&world);
    }

    assert!((world.co2ppm - (start.co2ppm + start.co2ppm_delta)).abs() < 1e-9);
    assert!(
        (world.global_temp_diff - (start.global_temp_diff + start.global_temp_diff_delta)).abs()
            < 1e-9
    );
}

#[test]
fn test_finance_index_tracks_gdp_every_day() {
    let mut world = initial_world(&EngineConfig::default());
    for _ in 0..100 {
        world = advance_day(&world);
        for region in &world.regions {
            let expected = finance_index(region.gdp_capita).clamp(0.0, 10.0);
            assert!((region.finance_index - expected).abs() < 1e-9, "{}", region.name);
        }
    }
}

#[test]
fn test_original_population_never_changes() {
    let start = initial_world(&EngineConfig::default());
    let mut world = start.clone();
    for _ in 0..500 {
        world = advance_day(&world);
    }
    for (before, after) in start.regions.iter().zip(&world.regions) {
        assert_eq!(before.original_population, after.original_population);
        assert_eq!(before.neighbors, after.neighbors);
        assert_eq!(before.map_rect, after.map_rect);
    }
}

#[test]
fn test_paused_scheduler_never_advances() {
    let config = EngineConfig::default();
    let catalog = InterventionCatalog::with_defaults();
    let mut scheduler = Scheduler::new(config.clone());
    let mut world = set_game_speed(&initial_world(&config), 0);

    for _ in 0..1000 {
        let tick = scheduler.tick(&world, 16, &catalog);
        assert_eq!(tick.days_advanced, 0);
        world = tick.world;
    }
    assert_eq!(world.day, 0);

    // Unpausing picks up from a clean accumulator
    world = set_game_speed(&world, 1);
    let tick = scheduler.tick(&world, 1000, &catalog);
    assert_eq!(tick.days_advanced, 1);
}

#[test]
fn test_sixty_fps_frames_make_a_day_per_second() {
    let config = EngineConfig::default();
    let catalog = InterventionCatalog::with_defaults();
    let mut scheduler = Scheduler::new(config.clone());
    let mut world = initial_world(&config);
    let mut news = NewsLog::new(config.news_capacity);

    // 10 seconds at ~60 frames per second
    for _ in 0..600 {
        let tick = scheduler.tick(&world, 17, &catalog);
        news.extend(tick.events);
        world = tick.world;
    }

    assert_eq!(world.day, 10);
    assert_eq!(news.iter().filter(|e| e.kind == NewsKind::DayAdvanced).count(), 10);
}

#[test]
fn test_selection_survives_days() {
    let config = EngineConfig::default();
    let mut world = initial_world(&config);
    world.selected_region_name = Some(RegionName::SouthAmerica);
    for _ in 0..10 {
        world = advance_day(&world);
    }
    assert_eq!(world.selected_region().unwrap().name, RegionName::SouthAmerica);
}
