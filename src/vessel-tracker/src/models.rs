use port_watch_core::{Mmsi, VesselFix};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Response body of the vessel feed.
/// The feed has been observed both wrapping the records in a `data` field and returning
/// them as a bare array.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FeedBody {
    Wrapped { data: Vec<RawVesselFix> },
    Bare(Vec<RawVesselFix>),
}

/// A position record as sent by the feed, every field may be missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawVesselFix {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mmsi: Option<RawMmsi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawMmsi {
    Text(String),
    Number(u64),
}

impl FeedBody {
    /// Converts the records into valid fixes, dropping every record without a usable
    /// identifier or position.
    pub fn into_fixes(self) -> Vec<VesselFix> {
        let records = match self {
            FeedBody::Wrapped { data } => data,
            FeedBody::Bare(data) => data,
        };

        let num_records = records.len();
        let fixes: Vec<VesselFix> = records.into_iter().filter_map(|r| r.into_fix()).collect();

        if fixes.len() < num_records {
            debug!(
                "dropped {} of {num_records} feed records without a valid fix",
                num_records - fixes.len()
            );
        }

        fixes
    }
}

impl RawVesselFix {
    pub fn into_fix(self) -> Option<VesselFix> {
        let RawVesselFix {
            mmsi,
            lat,
            lon,
            speed,
            course,
            timestamp,
        } = self;

        let mmsi = match mmsi? {
            RawMmsi::Text(v) => Mmsi::new(v),
            RawMmsi::Number(v) => Mmsi::new(v.to_string()),
        }?;

        Some(
            VesselFix::new(mmsi, lat?, lon?)?
                .with_kinematics(speed, course)
                .with_timestamp(timestamp),
        )
    }
}
