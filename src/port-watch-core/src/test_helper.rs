use crate::*;

impl RegionTable {
    /// The five dashboard ports, corners in the order they are configured.
    pub fn test_default() -> Self {
        RegionTable::new(vec![
            GeoRegion::new("Durban", [-29.9626, 31.0822], [-29.7205, 30.8762]),
            GeoRegion::new("Cape Town", [-33.895056, 18.410718], [-34.013399, 18.452209]),
            GeoRegion::new(
                "Port Elizabeth",
                [-34.017609, 25.612232],
                [-33.964904, 25.689558],
            ),
            GeoRegion::new("Miami", [25.835302, -80.207729], [25.6027, -79.879297]),
            GeoRegion::new(
                "Los Angeles",
                [33.772292, -118.356139],
                [33.67349, -118.095731],
            ),
        ])
        .unwrap()
    }
}

impl VesselFix {
    pub fn test_new(mmsi: &str, latitude: f64, longitude: f64) -> Self {
        VesselFix::new(Mmsi::new(mmsi).unwrap(), latitude, longitude)
            .unwrap()
            .with_kinematics(Some(10.0), Some(90.0))
            .with_timestamp(Some("2024-10-01T12:00:00Z".into()))
    }
}
