//! Streaming server tokens
//!
//! The closed set of streaming backends a provider can resolve episode
//! sources against.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A named streaming backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamingServer {
    AsianLoad,
    GogoCdn,
    StreamSb,
    MixDrop,
    Mp4Upload,
    UpCloud,
    VidCloud,
    StreamTape,
    VizCloud,
    MyCloud,
    Filemoon,
    VidStreaming,
    SmashyStream,
    StreamHub,
    StreamWish,
    VidMoly,
}

impl StreamingServer {
    /// Every known streaming server, in declaration order
    pub const ALL: &'static [StreamingServer] = &[
        Self::AsianLoad,
        Self::GogoCdn,
        Self::StreamSb,
        Self::MixDrop,
        Self::Mp4Upload,
        Self::UpCloud,
        Self::VidCloud,
        Self::StreamTape,
        Self::VizCloud,
        Self::MyCloud,
        Self::Filemoon,
        Self::VidStreaming,
        Self::SmashyStream,
        Self::StreamHub,
        Self::StreamWish,
        Self::VidMoly,
    ];

    /// Wire token for this server
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AsianLoad => "asianload",
            Self::GogoCdn => "gogocdn",
            Self::StreamSb => "streamsb",
            Self::MixDrop => "mixdrop",
            Self::Mp4Upload => "mp4upload",
            Self::UpCloud => "upcloud",
            Self::VidCloud => "vidcloud",
            Self::StreamTape => "streamtape",
            Self::VizCloud => "vizcloud",
            Self::MyCloud => "mycloud",
            Self::Filemoon => "filemoon",
            Self::VidStreaming => "vidstreaming",
            Self::SmashyStream => "smashystream",
            Self::StreamHub => "streamhub",
            Self::StreamWish => "streamwish",
            Self::VidMoly => "vidmoly",
        }
    }
}

impl fmt::Display for StreamingServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token names no known server
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown streaming server: {0}")]
pub struct UnknownServer(pub String);

impl FromStr for StreamingServer {
    type Err = UnknownServer;

    /// Tokens are matched exactly; `UpCloud` is not `upcloud`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|server| server.as_str() == s)
            .ok_or_else(|| UnknownServer(s.to_string()))
    }
}
