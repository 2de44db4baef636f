//! Literal incident sets loaded into the store at process start.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::incident::IncidentRecord;

const SMOKE_PHOTO_URL: &str = "https://firebasestorage.googleapis.com/v0/b/discute-d033d.appspot.com/o/uploads%2Fai-implementation.png?alt=media&token=c9581d00-cecb-4e78-b8cd-3f7c3b9d85ea";

/// Which seed data set to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSet {
    /// One record carrying an `id` and a hosted image URL.
    #[default]
    Single,
    /// Four records without `id` or URL fields.
    Legacy,
    /// Start with nothing.
    Empty,
}

impl SeedSet {
    /// Materialize the records of this set, in order.
    #[must_use]
    pub fn records(self) -> Vec<IncidentRecord> {
        match self {
            Self::Single => vec![
                IncidentRecord::new()
                    .with("id", "1234")
                    .with("time_date", "2025-03-29 08:30")
                    .with("building", "Building A")
                    .with("primary_category", "Fire")
                    .with("incident_category", "Electrical Fire")
                    .with("secondary_category", "Short Circuit")
                    .with("incident_url", SMOKE_PHOTO_URL)
                    .with("severity", "High")
                    .with("incident_level", "Level 3")
                    .with("probability", "Likely")
                    .with("description", "Smoke detected in server room."),
            ],
            Self::Legacy => vec![
                legacy(
                    "2025-03-29 08:30",
                    "Building A",
                    ("Fire", "Electrical Fire", "Short Circuit"),
                    ("High", "Level 3", "Likely"),
                    "Smoke detected in server room.",
                ),
                legacy(
                    "2025-03-29 11:15",
                    "Building B",
                    ("Safety", "Slip and Fall", "Wet Floor"),
                    ("Medium", "Level 2", "Possible"),
                    "Employee slipped near the cafeteria entrance.",
                ),
                legacy(
                    "2025-03-30 14:05",
                    "Building C",
                    ("Security", "Unauthorized Access", "Tailgating"),
                    ("High", "Level 3", "Unlikely"),
                    "Unbadged visitor followed staff into the lab.",
                ),
                legacy(
                    "2025-03-31 09:45",
                    "Building A",
                    ("Environmental", "Chemical Spill", "Container Leak"),
                    ("Low", "Level 1", "Rare"),
                    "Small solvent leak contained in storage room 2.",
                ),
            ],
            Self::Empty => Vec::new(),
        }
    }
}

fn legacy(
    time_date: &str,
    building: &str,
    (primary, incident, secondary): (&str, &str, &str),
    (severity, level, probability): (&str, &str, &str),
    description: &str,
) -> IncidentRecord {
    IncidentRecord::new()
        .with("time_date", time_date)
        .with("building", building)
        .with("primary_category", primary)
        .with("incident_category", incident)
        .with("secondary_category", secondary)
        .with("severity", severity)
        .with("incident_level", level)
        .with("probability", probability)
        .with("description", description)
}

impl fmt::Display for SeedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Legacy => "legacy",
            Self::Empty => "empty",
        })
    }
}

/// Returned when parsing an unknown seed set name.
#[derive(Debug, thiserror::Error)]
#[error("unknown seed set {0:?}, expected one of: single, legacy, empty")]
pub struct UnknownSeedSet(pub String);

impl FromStr for SeedSet {
    type Err = UnknownSeedSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "legacy" => Ok(Self::Legacy),
            "empty" => Ok(Self::Empty),
            _ => Err(UnknownSeedSet(s.to_string())),
        }
    }
}
