use async_trait::async_trait;

use crate::{FetchError, VesselFix};

/// A remote source of current vessel positions.
#[async_trait]
pub trait VesselFeedSource: Send + Sync + 'static {
    /// Performs a single fetch of the feed.
    /// Implementors must only return fixes that pass [crate::is_valid_position], an empty
    /// vector is a successful fetch with no usable positions.
    async fn fetch_fixes(&self) -> Result<Vec<VesselFix>, FetchError>;
}
