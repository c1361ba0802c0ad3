use reqwest::{StatusCode, Url};
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to build HTTP client"))]
    Build {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("Failed to send HTTP request"))]
    Send {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest_middleware::Error,
    },
    #[snafu(display("Failed to read HTTP response body, url: '{url}'"))]
    Body {
        #[snafu(implicit)]
        location: Location,
        url: Url,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("Failed to decode HTTP response body, url: '{url}'"))]
    Decode {
        #[snafu(implicit)]
        location: Location,
        url: Url,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("HTTP request failed, status: '{status}', url: '{url}', body: '{body}'"))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: Url,
        status: StatusCode,
        body: String,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::FailedRequest { status, .. } => Some(*status),
            Error::Build { .. } | Error::Send { .. } | Error::Body { .. } | Error::Decode { .. } => {
                None
            }
        }
    }
}
