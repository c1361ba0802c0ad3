use async_trait::async_trait;
use http_client::{HttpClient, Url};
use port_watch_core::{FetchError, VesselFeedSource, VesselFix, fetch_error::FeedSnafu};
use snafu::ResultExt;
use tracing::instrument;

use crate::models::FeedBody;

/// Client for the HTTP vessel feed.
pub struct VesselFeedClient {
    url: Url,
    client: HttpClient,
}

impl VesselFeedClient {
    pub fn new(url: Url, client: HttpClient) -> VesselFeedClient {
        VesselFeedClient { url, client }
    }

    /// Downloads the current feed body without any filtering.
    async fn download(&self) -> http_client::Result<FeedBody> {
        self.client.get(self.url.clone()).send().await?.json().await
    }
}

#[async_trait]
impl VesselFeedSource for VesselFeedClient {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn fetch_fixes(&self) -> Result<Vec<VesselFix>, FetchError> {
        let body = self.download().await.boxed().context(FeedSnafu)?;
        Ok(body.into_fixes())
    }
}
