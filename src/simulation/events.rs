//! News log feeding the ticker

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::actions::catalog::InterventionId;
use crate::actions::apply::Rejection;
use crate::core::calendar::Day;
use crate::core::types::RegionName;

/// A single news entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsEvent {
    pub id: u64,
    pub day: Day,
    pub kind: NewsKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NewsKind {
    DayAdvanced,
    InterventionApplied {
        intervention: InterventionId,
        region: RegionName,
        cost: f64,
    },
    InterventionRejected {
        intervention: InterventionId,
        reason: Rejection,
    },
    UnknownIntervention {
        intervention: InterventionId,
    },
    NonFiniteIndicator {
        region: RegionName,
        field: String,
    },
}

impl NewsKind {
    pub fn headline(&self) -> String {
        match self {
            NewsKind::DayAdvanced => "A new day begins".to_string(),
            NewsKind::InterventionApplied { intervention, region, cost } => {
                format!("{} launched in {} for {:.0}", intervention, region, cost)
            }
            NewsKind::InterventionRejected { intervention, reason } => {
                format!("{} declined: {}", intervention, reason)
            }
            NewsKind::UnknownIntervention { intervention } => {
                format!("No such intervention: {}", intervention)
            }
            NewsKind::NonFiniteIndicator { region, field } => {
                format!("{} reports an invalid {}", region, field)
            }
        }
    }
}

/// Bounded news history; the oldest entries fall off first
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewsLog {
    events: VecDeque<NewsEvent>,
    capacity: usize,
    next_event_id: u64,
}

impl NewsLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            next_event_id: 0,
        }
    }

    pub fn add_event(&mut self, day: Day, kind: NewsKind) -> u64 {
        let id = self.next_event_id;
        self.next_event_id += 1;

        if self.capacity == 0 {
            return id;
        }
        while self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(NewsEvent { id, day, kind });

        id
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = (Day, NewsKind)>) {
        for (day, kind) in events {
            self.add_event(day, kind);
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NewsEvent> {
        self.events.iter()
    }

    /// Most recent entries, newest first
    pub fn latest(&self, n: usize) -> impl Iterator<Item = &NewsEvent> {
        self.events.iter().rev().take(n)
    }

    pub fn for_day(&self, day: Day) -> impl Iterator<Item = &NewsEvent> {
        self.events.iter().filter(move |e| e.day == day)
    }
}
