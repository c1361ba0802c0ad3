use std::sync::Arc;

use http_client::{HttpClient, Url};
use port_watch_core::VesselFeedSource;
use snafu::ResultExt;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::{
    Result,
    error::error::{FeedUrlSnafu, HttpClientSnafu, JoinSnafu},
    feed::VesselFeedClient,
    ingestor::FeedIngestor,
    settings::Settings,
    tracker::{Tracker, TrackerHandle, TrackerSnapshot},
};

pub struct App {
    handle: TrackerHandle,
    tracker: JoinHandle<()>,
}

impl App {
    pub async fn build(settings: &Settings) -> Result<App> {
        let client = HttpClient::builder()
            .timeout(settings.feed.request_timeout)
            .max_retries(settings.feed.max_retries)
            .build()
            .context(HttpClientSnafu)?;

        let url = Url::parse(&settings.feed.url)
            .boxed()
            .context(FeedUrlSnafu {
                url: settings.feed.url.clone(),
            })?;

        Ok(Self::build_with_source(settings, Arc::new(VesselFeedClient::new(url, client))).await)
    }

    /// Starts the tracker against an arbitrary feed source, the first fetch is issued
    /// immediately.
    pub async fn build_with_source(settings: &Settings, source: Arc<dyn VesselFeedSource>) -> App {
        let (tracker, handle) = Tracker::new(
            FeedIngestor::new(source),
            Arc::new(settings.regions.clone()),
            settings.tracker(),
        );

        App {
            handle,
            tracker: tracker.spawn(),
        }
    }

    pub fn handle(&self) -> TrackerHandle {
        self.handle.clone()
    }

    /// Logs every published snapshot until ctrl-c is received or the tracker stops.
    pub async fn run(self) -> Result<()> {
        let mut snapshots = self.handle.subscribe();
        render(&snapshots.borrow_and_update());

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    info!("received shutdown signal");
                    break;
                }
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        warn!("tracker stopped unexpectedly");
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    render(&snapshot);
                }
            }
        }

        self.shutdown().await
    }

    pub async fn shutdown(self) -> Result<()> {
        self.handle.shutdown();
        self.tracker.await.context(JoinSnafu)
    }
}

#[instrument(skip_all, fields(version = snapshot.version))]
fn render(snapshot: &TrackerSnapshot) {
    info!("AIS Stream - Status: {}", snapshot.status);

    if let Some(detail) = &snapshot.error_detail {
        warn!("{detail}");
    }

    let viewport = snapshot.viewport();
    info!(
        "selected port: {}, viewport: [{}, {}] - [{}, {}]",
        snapshot.selection.region,
        viewport.first.latitude,
        viewport.first.longitude,
        viewport.second.latitude,
        viewport.second.longitude,
    );

    for (port, count) in snapshot.occupancy.iter() {
        info!("{port}: {count} ships");
    }

    info!(
        "{} vessels on map, {} port overlays",
        snapshot.vessels.len(),
        snapshot.overlays.len()
    );
}
