//! Travel status classification.
//!
//! A [`TravelRecord`] maps onto exactly one of three states: in the air,
//! abroad, or home. The mapping is pure; rendering lives in [`render`] and
//! request ordering in [`presenter`].

pub mod duration;
pub mod presenter;
pub mod render;

use crate::torn::models::{HOME_LOCATION, TravelRecord};
use chrono::{DateTime, Utc};
use duration::format_duration;
use serde::Serialize;

const ABROAD_DETAIL: &str = "Enjoying the vacation area!";
const HOME_DETAIL: &str = "Status: Safe and sound in Torn City.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Flying,
    Abroad,
    Home,
}

/// Which way a flight is heading relative to the foreign location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Outbound from home
    To,
    /// Returning home
    From,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::To => "to",
            Direction::From => "from",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Classification {
    Flying {
        direction: Direction,
        destination: String,
        origin: Option<String>,
        time_left: i64,
        arrives_at: Option<DateTime<Utc>>,
    },
    Abroad {
        destination: String,
    },
    Home,
}

impl Classification {
    pub fn kind(&self) -> StatusKind {
        match self {
            Classification::Flying { .. } => StatusKind::Flying,
            Classification::Abroad { .. } => StatusKind::Abroad,
            Classification::Home => StatusKind::Home,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Classification::Flying { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    pub fn destination_name(&self) -> Option<&str> {
        match self {
            Classification::Flying { destination, .. }
            | Classification::Abroad { destination } => Some(destination),
            Classification::Home => None,
        }
    }

    /// Secondary line shown under the headline.
    pub fn detail_text(&self) -> String {
        match self {
            Classification::Flying { time_left, .. } => {
                format!("Time left: {}", format_duration(*time_left))
            }
            Classification::Abroad { .. } => ABROAD_DETAIL.to_string(),
            Classification::Home => HOME_DETAIL.to_string(),
        }
    }

    /// Headline, e.g. "Flying to Mexico" or "Abroad in Japan".
    pub fn description(&self) -> String {
        match self {
            Classification::Flying {
                direction,
                destination,
                origin,
                ..
            } => {
                // Outbound names where we're going, a return where we left
                let place = match direction {
                    Direction::To => destination.as_str(),
                    Direction::From => origin.as_deref().unwrap_or("abroad"),
                };
                format!("Flying {} {}", direction.as_str(), place)
            }
            Classification::Abroad { destination } => format!("Abroad in {}", destination),
            Classification::Home => format!("Not Flying - Home in {}", HOME_LOCATION),
        }
    }
}

/// Classify a travel record. First match wins: in transit, then away from
/// home, then home. Any non-transit record at home counts as home.
pub fn classify(record: &TravelRecord) -> Classification {
    if record.is_travelling() {
        return Classification::Flying {
            direction: direction_of(record),
            destination: record.destination.clone(),
            origin: record.origin().map(str::to_string),
            time_left: record.time_left,
            arrives_at: record
                .timestamp
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        };
    }

    if record.destination != HOME_LOCATION {
        Classification::Abroad {
            destination: record.destination.clone(),
        }
    } else {
        Classification::Home
    }
}

// A flight leaving home is outbound; one leaving anywhere else is a return.
fn direction_of(record: &TravelRecord) -> Direction {
    match record.origin() {
        Some(origin) if origin == HOME_LOCATION => Direction::To,
        Some(_) => Direction::From,
        None if record.destination == HOME_LOCATION => Direction::From,
        None => Direction::To,
    }
}
