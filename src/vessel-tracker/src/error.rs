use port_watch_core::SelectionError;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid feed url '{url}'"))]
    FeedUrl {
        #[snafu(implicit)]
        location: Location,
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[snafu(display("Failed to construct the http client"))]
    HttpClient {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: http_client::Error,
    },
    #[snafu(display("The tracker is no longer running"))]
    TrackerClosed {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Failed to select region"))]
    Selection {
        #[snafu(implicit)]
        location: Location,
        source: SelectionError,
    },
    #[snafu(display("Failed to join the tracker task"))]
    Join {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: tokio::task::JoinError,
    },
}
