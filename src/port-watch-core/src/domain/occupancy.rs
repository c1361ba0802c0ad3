use std::collections::{BTreeMap, btree_map};

use serde::Serialize;

use crate::{GeoRegion, RegionTable, VesselFix, VesselSet};

/// Number of vessels inside each region of a [RegionTable].
/// Every region of the table has an entry, regions without vessels count zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegionOccupancy(BTreeMap<String, u32>);

impl RegionOccupancy {
    /// All regions of the table with a count of zero.
    pub fn empty(regions: &RegionTable) -> Self {
        Self(regions.names().map(|n| (n.to_string(), 0)).collect())
    }

    pub fn count(&self, region: &str) -> Option<u32> {
        self.0.get(region).copied()
    }

    /// Sum over all regions. Overlapping regions count a vessel once per region, so this can
    /// exceed the number of vessels.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, u32> {
        self.0.iter()
    }
}

/// Counts how many of `fixes` fall inside each region of `regions`.
pub fn classify(fixes: &VesselSet, regions: &RegionTable) -> RegionOccupancy {
    let mut occupancy = RegionOccupancy::empty(regions);

    for fix in fixes {
        for region in regions_containing(fix, regions) {
            if let Some(count) = occupancy.0.get_mut(&region.name) {
                *count += 1;
            }
        }
    }

    occupancy
}

/// Regions the fix lies within, in table order.
pub fn regions_containing<'a>(
    fix: &'a VesselFix,
    regions: &'a RegionTable,
) -> impl Iterator<Item = &'a GeoRegion> {
    regions
        .iter()
        .filter(move |r| r.bounds.contains(fix.latitude, fix.longitude))
}
