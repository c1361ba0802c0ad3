use std::{
    collections::{HashMap, hash_map},
    fmt::Display,
};

use serde::Serialize;

/// Maritime Mobile Service Identity, the stable per-vessel key of the feed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Mmsi(String);

/// The most recent position reported by a single vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselFix {
    pub mmsi: Mmsi,
    pub latitude: f64,
    pub longitude: f64,
    /// Speed over ground in knots.
    pub speed_over_ground: Option<f64>,
    /// Course over ground in degrees.
    pub course_over_ground: Option<f64>,
    /// Fix time as reported by the feed, it is displayed verbatim and never parsed.
    pub timestamp: Option<String>,
}

/// All known vessels keyed by [Mmsi], at most one fix per vessel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselSet(HashMap<Mmsi, VesselFix>);

/// Returns true if the coordinate pair is a usable position.
///
/// `(0, 0)` is what the feed reports for vessels without a fix and is rejected along with
/// non-finite or out of range values.
pub fn is_valid_position(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
        && !(latitude == 0.0 && longitude == 0.0)
}

impl Mmsi {
    /// Returns `None` for blank identifiers.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == value.len() {
            Some(Self(value))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for Mmsi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl VesselFix {
    /// Creates a fix if the position is valid, see [is_valid_position].
    pub fn new(mmsi: Mmsi, latitude: f64, longitude: f64) -> Option<Self> {
        is_valid_position(latitude, longitude).then_some(Self {
            mmsi,
            latitude,
            longitude,
            speed_over_ground: None,
            course_over_ground: None,
            timestamp: None,
        })
    }

    pub fn with_kinematics(mut self, speed: Option<f64>, course: Option<f64>) -> Self {
        self.speed_over_ground = speed;
        self.course_over_ground = course;
        self
    }

    pub fn with_timestamp(mut self, timestamp: Option<String>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl VesselSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, mmsi: &Mmsi) -> Option<&VesselFix> {
        self.0.get(mmsi)
    }

    pub fn contains(&self, mmsi: &Mmsi) -> bool {
        self.0.contains_key(mmsi)
    }

    pub fn iter(&self) -> hash_map::Values<'_, Mmsi, VesselFix> {
        self.0.values()
    }

    /// Inserts the fix, replacing any earlier fix for the same vessel.
    pub fn insert(&mut self, fix: VesselFix) -> Option<VesselFix> {
        self.0.insert(fix.mmsi.clone(), fix)
    }
}

impl FromIterator<VesselFix> for VesselSet {
    fn from_iter<T: IntoIterator<Item = VesselFix>>(iter: T) -> Self {
        let mut set = VesselSet::new();
        for fix in iter {
            set.insert(fix);
        }
        set
    }
}

impl<'a> IntoIterator for &'a VesselSet {
    type Item = &'a VesselFix;
    type IntoIter = hash_map::Values<'a, Mmsi, VesselFix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
