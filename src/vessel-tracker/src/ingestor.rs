use std::sync::Arc;

use port_watch_core::{FeedStatus, VesselFeedSource, VesselSet};
use tracing::{error, instrument, warn};

/// Result of a single ingest cycle. Fetch errors end here and are never propagated further.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// The feed returned at least one valid fix.
    Published(VesselSet),
    /// The feed answered but no record had a valid fix.
    NoData,
    /// The request failed or the body could not be decoded.
    Failed,
}

/// Fetches the feed once per call and turns the response into an [IngestOutcome].
pub struct FeedIngestor {
    source: Arc<dyn VesselFeedSource>,
}

impl FeedIngestor {
    pub fn new(source: Arc<dyn VesselFeedSource>) -> Self {
        Self { source }
    }

    #[instrument(skip_all, fields(app.num_vessels))]
    pub async fn ingest(&self) -> IngestOutcome {
        match self.source.fetch_fixes().await {
            Ok(fixes) => {
                let vessels: VesselSet = fixes.into_iter().collect();
                tracing::Span::current().record("app.num_vessels", vessels.len());

                if vessels.is_empty() {
                    warn!("no valid ship data received");
                    IngestOutcome::NoData
                } else {
                    IngestOutcome::Published(vessels)
                }
            }
            Err(e) => {
                error!("failed to fetch ship data: {e:?}");
                IngestOutcome::Failed
            }
        }
    }
}

impl IngestOutcome {
    pub fn status(&self) -> FeedStatus {
        match self {
            IngestOutcome::Published(_) => FeedStatus::Connected,
            IngestOutcome::NoData => FeedStatus::NoShipsAvailable,
            IngestOutcome::Failed => FeedStatus::Error,
        }
    }
}
