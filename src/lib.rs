//! World Sim - day-by-day continent simulation
//!
//! Nine regions carry demographic and socioeconomic indicators that evolve
//! once per simulated day. The player nudges them with costed interventions.

pub mod actions;
pub mod core;
pub mod output;
pub mod runner;
pub mod simulation;
pub mod world;
