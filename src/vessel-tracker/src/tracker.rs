use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use port_watch_core::{
    FeedStatus, RegionOccupancy, RegionOverlay, RegionTable, SelectionController, SelectionError,
    SelectionState, VesselSet, ViewportBounds, classify,
};
use snafu::{OptionExt, ResultExt};
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::{JoinError, JoinHandle},
    time::{Instant, Interval, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use crate::{
    Result,
    error::error::{SelectionSnafu, TrackerClosedSnafu},
    ingestor::{FeedIngestor, IngestOutcome},
};

/// Detail shown alongside [FeedStatus::Error].
pub static FETCH_FAILED_DETAIL: &str = "Failed to load ship data.";

/// Everything the map view needs, published as a whole after every state change.
#[derive(Debug, Clone)]
pub struct TrackerSnapshot {
    /// Incremented on every publish.
    pub version: u64,
    pub status: FeedStatus,
    pub error_detail: Option<String>,
    pub vessels: Arc<VesselSet>,
    pub occupancy: Arc<RegionOccupancy>,
    pub selection: SelectionState,
    /// Every configured region, the selected one flagged.
    pub overlays: Vec<RegionOverlay>,
    pub regions: Arc<RegionTable>,
    /// Time of the last successful fetch, including fetches without any vessels.
    pub last_ingest: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Re-fetch the feed on this interval, `None` fetches once at start.
    pub poll_interval: Option<Duration>,
    pub command_buffer_size: usize,
}

enum Command {
    Refresh,
    Select {
        region: String,
        reply: oneshot::Sender<std::result::Result<ViewportBounds, SelectionError>>,
    },
}

/// Owns the vessel set, occupancy and selection. All mutation happens on the task running
/// [Tracker::run], readers only ever see complete [TrackerSnapshot]s.
pub struct Tracker {
    ingestor: Arc<FeedIngestor>,
    selection: SelectionController,
    poll_interval: Option<Duration>,
    commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<Arc<TrackerSnapshot>>,
    cancellation: CancellationToken,
    cycle: u64,
    in_flight: Option<(u64, JoinHandle<IngestOutcome>)>,
}

/// Cheap to clone interface to a running [Tracker].
#[derive(Clone)]
pub struct TrackerHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Arc<TrackerSnapshot>>,
    cancellation: CancellationToken,
}

impl TrackerSnapshot {
    fn initial(selection: &SelectionController) -> Self {
        let regions = selection.regions().clone();
        Self {
            version: 0,
            status: FeedStatus::Disconnected,
            error_detail: None,
            vessels: Arc::new(VesselSet::new()),
            occupancy: Arc::new(RegionOccupancy::empty(&regions)),
            selection: selection.state(),
            overlays: selection.overlays(),
            regions,
            last_ingest: None,
        }
    }

    pub fn viewport(&self) -> ViewportBounds {
        self.selection.bounds
    }
}

impl Tracker {
    pub fn new(
        ingestor: FeedIngestor,
        regions: Arc<RegionTable>,
        config: TrackerConfig,
    ) -> (Tracker, TrackerHandle) {
        let selection = SelectionController::new(regions);
        let initial = TrackerSnapshot::initial(&selection);

        let (command_sender, commands) = mpsc::channel(config.command_buffer_size.max(1));
        let (snapshots, snapshot_receiver) = watch::channel(Arc::new(initial));
        let cancellation = CancellationToken::new();

        let tracker = Tracker {
            ingestor: Arc::new(ingestor),
            selection,
            poll_interval: config.poll_interval,
            commands,
            snapshots,
            cancellation: cancellation.clone(),
            cycle: 0,
            in_flight: None,
        };

        let handle = TrackerHandle {
            commands: command_sender,
            snapshots: snapshot_receiver,
            cancellation,
        };

        (tracker, handle)
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Fetches the feed once immediately, then serves commands until shut down or until
    /// every [TrackerHandle] is dropped.
    pub async fn run(mut self) {
        let cancellation = self.cancellation.clone();
        let mut poll = self.poll_interval.map(|period| {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });

        self.start_cycle();

        loop {
            tokio::select! {
                biased;
                _ = cancellation.cancelled() => break,
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                (cycle, result) = join(&mut self.in_flight) => {
                    self.in_flight = None;
                    self.complete_cycle(cycle, result);
                }
                _ = tick(&mut poll) => self.start_cycle(),
            }
        }

        // A response arriving after this point has nowhere to go.
        if let Some((cycle, task)) = self.in_flight.take() {
            debug!(cycle, "aborting in-flight fetch");
            task.abort();
        }

        info!("tracker stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Refresh => self.start_cycle(),
            Command::Select { region, reply } => {
                let result = self.select(&region);
                // The caller may have given up waiting, the selection stands regardless.
                let _ = reply.send(result);
            }
        }
    }

    fn start_cycle(&mut self) {
        if let Some((cycle, _)) = &self.in_flight {
            debug!(cycle, "fetch already in progress, skipping refresh");
            return;
        }

        self.cycle += 1;
        let ingestor = self.ingestor.clone();
        let task = tokio::spawn(async move { ingestor.ingest().await });

        self.in_flight = Some((self.cycle, task));
        self.publish(|s| s.status = FeedStatus::Connecting);
    }

    #[instrument(skip(self, result), fields(app.status))]
    fn complete_cycle(
        &mut self,
        cycle: u64,
        result: std::result::Result<IngestOutcome, JoinError>,
    ) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("fetch task did not complete: {e:?}");
                IngestOutcome::Failed
            }
        };

        let status = outcome.status();
        tracing::Span::current().record("app.status", status.as_ref());

        let regions = self.selection.regions().clone();
        match outcome {
            IngestOutcome::Published(vessels) => {
                let occupancy = classify(&vessels, &regions);
                self.publish(|s| {
                    s.status = status;
                    s.error_detail = None;
                    s.vessels = Arc::new(vessels);
                    s.occupancy = Arc::new(occupancy);
                    s.last_ingest = Some(Utc::now());
                });
            }
            IngestOutcome::NoData => {
                self.publish(|s| {
                    s.status = status;
                    s.error_detail = None;
                    s.vessels = Arc::new(VesselSet::new());
                    s.occupancy = Arc::new(RegionOccupancy::empty(&regions));
                    s.last_ingest = Some(Utc::now());
                });
            }
            // The last published vessels stay visible.
            IngestOutcome::Failed => {
                self.publish(|s| {
                    s.status = status;
                    s.error_detail = Some(FETCH_FAILED_DETAIL.to_string());
                });
            }
        }
    }

    fn select(&mut self, region: &str) -> std::result::Result<ViewportBounds, SelectionError> {
        match self.selection.select(region) {
            Ok(bounds) => {
                let state = self.selection.state();
                if state != self.snapshots.borrow().selection {
                    let overlays = self.selection.overlays();
                    self.publish(|s| {
                        s.selection = state;
                        s.overlays = overlays;
                    });
                }
                Ok(bounds)
            }
            Err(e) => {
                error!("invalid region selection: {e:?}");
                Err(e)
            }
        }
    }

    fn publish(&self, update: impl FnOnce(&mut TrackerSnapshot)) {
        let mut next = TrackerSnapshot::clone(&self.snapshots.borrow());
        next.version += 1;
        update(&mut next);
        self.snapshots.send_replace(Arc::new(next));
    }
}

impl TrackerHandle {
    /// Requests a new fetch, ignored by the tracker if one is already in progress.
    pub async fn refresh(&self) -> Result<()> {
        self.commands
            .send(Command::Refresh)
            .await
            .ok()
            .context(TrackerClosedSnafu)
    }

    /// Fits the viewport to the named region and returns its bounds.
    pub async fn select(&self, region: impl Into<String>) -> Result<ViewportBounds> {
        let (reply, response) = oneshot::channel();

        self.commands
            .send(Command::Select {
                region: region.into(),
                reply,
            })
            .await
            .ok()
            .context(TrackerClosedSnafu)?;

        response
            .await
            .ok()
            .context(TrackerClosedSnafu)?
            .context(SelectionSnafu)
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<TrackerSnapshot> {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<TrackerSnapshot>> {
        self.snapshots.clone()
    }

    /// Stops the tracker and abandons any fetch in progress.
    pub fn shutdown(&self) {
        self.cancellation.cancel();
    }
}

async fn join(
    in_flight: &mut Option<(u64, JoinHandle<IngestOutcome>)>,
) -> (u64, std::result::Result<IngestOutcome, JoinError>) {
    match in_flight {
        Some((cycle, task)) => (*cycle, task.await),
        None => std::future::pending().await,
    }
}

async fn tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
