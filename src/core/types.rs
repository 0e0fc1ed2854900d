//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::SimError;

/// The nine simulated continent sections. Serialized names match `as_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegionName {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "Central America")]
    CentralAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Antarctica,
    Australia,
    Russia,
}

impl RegionName {
    /// Seed order; the world's region list always follows it
    pub const ALL: [RegionName; 9] = [
        RegionName::Africa,
        RegionName::Asia,
        RegionName::Europe,
        RegionName::NorthAmerica,
        RegionName::CentralAmerica,
        RegionName::SouthAmerica,
        RegionName::Antarctica,
        RegionName::Australia,
        RegionName::Russia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionName::Africa => "Africa",
            RegionName::Asia => "Asia",
            RegionName::Europe => "Europe",
            RegionName::NorthAmerica => "North America",
            RegionName::CentralAmerica => "Central America",
            RegionName::SouthAmerica => "South America",
            RegionName::Antarctica => "Antarctica",
            RegionName::Australia => "Australia",
            RegionName::Russia => "Russia",
        }
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionName {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimError::UnknownRegion(s.to_string()))
    }
}

/// Display box of a region on the world map, passed through untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl MapRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}
