mod occupancy;
mod region;
mod selection;
mod status;
mod vessel;

pub use occupancy::*;
pub use region::*;
pub use selection::*;
pub use status::*;
pub use vessel::*;
