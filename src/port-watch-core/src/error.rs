use snafu::{Location, Snafu};

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum FetchError {
    #[snafu(display("Failed to fetch vessel positions from the feed"))]
    Feed {
        #[snafu(implicit)]
        location: Location,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum SelectionError {
    #[snafu(display("Region '{name}' does not exist in the region table"))]
    UnknownRegion {
        #[snafu(implicit)]
        location: Location,
        name: String,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum RegionTableError {
    #[snafu(display("Region table must contain at least one region"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Region name '{name}' occurs more than once"))]
    DuplicateName {
        #[snafu(implicit)]
        location: Location,
        name: String,
    },
}
