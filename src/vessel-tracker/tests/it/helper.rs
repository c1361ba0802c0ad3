use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use port_watch_core::{FetchError, RegionTable, VesselFeedSource, VesselFix};
use tokio::sync::Notify;
use vessel_tracker::{
    models::{FeedBody, RawMmsi, RawVesselFix},
    settings::{Environment, FeedSettings, LogLevel, Settings},
    startup::App,
    tracker::{TrackerHandle, TrackerSnapshot},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

static WAIT_TIMEOUT: Duration = Duration::from_secs(5);
pub static FEED_PATH: &str = "/api/ships";

pub struct TestHelper {
    pub app: App,
    pub handle: TrackerHandle,
}

/// A feed source that does not answer until released.
#[derive(Default)]
pub struct BlockingSource {
    pub fixes: Vec<VesselFix>,
    pub started: Notify,
    pub release: Notify,
}

/// A feed source whose first fetch panics, later fetches succeed.
#[derive(Default)]
pub struct PanicOnceSource {
    pub fixes: Vec<VesselFix>,
    pub calls: AtomicUsize,
}

impl TestHelper {
    pub async fn start(settings: Settings) -> TestHelper {
        let app = App::build(&settings).await.unwrap();
        let handle = app.handle();
        TestHelper { app, handle }
    }

    pub async fn start_with_source(
        settings: Settings,
        source: Arc<dyn VesselFeedSource>,
    ) -> TestHelper {
        let app = App::build_with_source(&settings, source).await;
        let handle = app.handle();
        TestHelper { app, handle }
    }

    /// Waits until a published snapshot satisfies `f` and returns it.
    pub async fn wait_for(
        &self,
        mut f: impl FnMut(&TrackerSnapshot) -> bool,
    ) -> Arc<TrackerSnapshot> {
        let mut receiver = self.handle.subscribe();
        let result = tokio::time::timeout(WAIT_TIMEOUT, receiver.wait_for(|s| f(s)))
            .await
            .expect("timed out waiting for snapshot");
        result.expect("tracker stopped").clone()
    }

    /// Waits until `version` has been superseded by a snapshot that is not `Connecting`.
    pub async fn wait_for_cycle_after(&self, version: u64) -> Arc<TrackerSnapshot> {
        self.wait_for(|s| s.version > version && s.status != port_watch_core::FeedStatus::Connecting)
            .await
    }
}

pub fn test_settings(url: String) -> Settings {
    Settings {
        environment: Environment::Local,
        log_level: LogLevel::Debug,
        command_buffer_size: 16,
        feed: FeedSettings {
            url,
            request_timeout: Duration::from_millis(300),
            max_retries: 0,
            poll_interval: None,
        },
        regions: RegionTable::test_default(),
    }
}

pub fn feed_url(server: &MockServer) -> String {
    format!("{}{FEED_PATH}", server.uri())
}

pub fn ship(mmsi: &str, lat: f64, lon: f64) -> RawVesselFix {
    RawVesselFix {
        mmsi: Some(RawMmsi::Text(mmsi.into())),
        lat: Some(lat),
        lon: Some(lon),
        speed: Some(10.0),
        course: Some(90.0),
        timestamp: Some("t1".into()),
    }
}

pub fn bare(ships: Vec<RawVesselFix>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(FeedBody::Bare(ships))
}

pub fn wrapped(ships: Vec<RawVesselFix>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(FeedBody::Wrapped { data: ships })
}

/// Serves `template` for the next `times` requests, or for every request if `None`.
pub async fn mount_feed(server: &MockServer, template: ResponseTemplate, times: Option<u64>) {
    let mock = Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(template);

    let mock = match times {
        Some(n) => mock.up_to_n_times(n),
        None => mock,
    };

    mock.mount(server).await;
}

impl BlockingSource {
    pub fn new(fixes: Vec<VesselFix>) -> Self {
        Self {
            fixes,
            ..Default::default()
        }
    }
}

#[async_trait]
impl VesselFeedSource for BlockingSource {
    async fn fetch_fixes(&self) -> Result<Vec<VesselFix>, FetchError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.fixes.clone())
    }
}

impl PanicOnceSource {
    pub fn new(fixes: Vec<VesselFix>) -> Self {
        Self {
            fixes,
            ..Default::default()
        }
    }
}

#[async_trait]
impl VesselFeedSource for PanicOnceSource {
    async fn fetch_fixes(&self) -> Result<Vec<VesselFix>, FetchError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("feed source panicked");
        }
        Ok(self.fixes.clone())
    }
}
