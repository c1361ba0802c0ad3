use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    RegionTableError,
    region_table_error::{DuplicateNameSnafu, EmptySnafu},
};

/// A latitude/longitude pair, configured as a `[lat, lon]` array.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A rectangle given by two opposite corners.
///
/// The corners are kept in the order they were configured. Conventionally `first` is the
/// south-west corner and `second` the north-east one, but configured tables are not
/// consistent about this and no ordering is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "[Coordinates; 2]", into = "[Coordinates; 2]")]
pub struct Bounds {
    pub first: Coordinates,
    pub second: Coordinates,
}

/// The rectangle a map view is fitted to.
pub type ViewportBounds = Bounds;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeoRegion {
    pub name: String,
    #[serde(rename = "corners")]
    pub bounds: Bounds,
}

/// Named regions in configuration order, names are unique and the table is never empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<GeoRegion>")]
pub struct RegionTable {
    regions: Vec<GeoRegion>,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.latitude, c.longitude]
    }
}

impl Bounds {
    pub fn new(first: Coordinates, second: Coordinates) -> Self {
        Self { first, second }
    }

    /// Inclusive on every edge, independent of corner order.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        between(latitude, self.first.latitude, self.second.latitude)
            && between(longitude, self.first.longitude, self.second.longitude)
    }
}

impl From<[Coordinates; 2]> for Bounds {
    fn from([first, second]: [Coordinates; 2]) -> Self {
        Self::new(first, second)
    }
}

impl From<Bounds> for [Coordinates; 2] {
    fn from(b: Bounds) -> Self {
        [b.first, b.second]
    }
}

impl GeoRegion {
    pub fn new(name: impl Into<String>, first: [f64; 2], second: [f64; 2]) -> Self {
        Self {
            name: name.into(),
            bounds: Bounds::new(first.into(), second.into()),
        }
    }
}

impl RegionTable {
    pub fn new(regions: Vec<GeoRegion>) -> Result<Self, RegionTableError> {
        if regions.is_empty() {
            return EmptySnafu.fail();
        }

        let mut names = HashSet::with_capacity(regions.len());
        for r in &regions {
            if !names.insert(r.name.as_str()) {
                return DuplicateNameSnafu {
                    name: r.name.clone(),
                }
                .fail();
            }
        }

        Ok(Self { regions })
    }

    pub fn get(&self, name: &str) -> Option<&GeoRegion> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.name == name)
    }

    pub(crate) fn by_index(&self, index: usize) -> &GeoRegion {
        &self.regions[index]
    }

    /// The region selected before any user interaction.
    pub fn default_region(&self) -> &GeoRegion {
        &self.regions[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoRegion> {
        self.regions.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl TryFrom<Vec<GeoRegion>> for RegionTable {
    type Error = RegionTableError;

    fn try_from(regions: Vec<GeoRegion>) -> Result<Self, Self::Error> {
        Self::new(regions)
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a GeoRegion;
    type IntoIter = std::slice::Iter<'a, GeoRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn between(value: f64, a: f64, b: f64) -> bool {
    let (min, max) = ordered(a, b);
    min <= value && value <= max
}
