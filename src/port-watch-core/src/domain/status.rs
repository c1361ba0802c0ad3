use serde::Serialize;
use strum::{AsRefStr, Display};

/// Connection state of the vessel feed as shown on the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
pub enum FeedStatus {
    #[default]
    Disconnected,
    #[strum(serialize = "Connecting...")]
    Connecting,
    Connected,
    /// The feed answered but contained no usable positions. Not an error.
    #[strum(serialize = "No Ships Available")]
    NoShipsAvailable,
    Error,
}
