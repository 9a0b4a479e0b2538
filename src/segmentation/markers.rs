use regex::Regex;
use std::sync::LazyLock;

static TRACK_NAME_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Track name:\s*(.+)").expect("static regex"));
static NEW_TRACK_ID_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=>\s*<(.+?)>").expect("static regex"));
static TRACK_DURATION_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Track duration:\s*(\d+)").expect("static regex"));

/// Textual signatures recognised in a spotupnp log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `Got track ID=` - a track was loaded; always opens an episode.
    TrackAcquired,
    /// `Track name: <title>` - opens an episode only when none is open.
    TrackName,
    /// `Playing done` - closes the open episode.
    PlaybackFinished,
    /// `new track id <id> => <<title>>` - fallback title source.
    NewTrackId,
    /// `Track duration: <ms>`
    TrackDuration,
}

/// What a marker means to the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// Opens an episode, force-closing any open one.
    Start,
    /// Opens an episode only if none is open.
    StartWhenIdle,
    End,
    /// Metadata only; ignored by the segmenter.
    Metadata,
}

impl Marker {
    pub const ALL: [Marker; 5] = [
        Marker::TrackAcquired,
        Marker::TrackName,
        Marker::PlaybackFinished,
        Marker::NewTrackId,
        Marker::TrackDuration,
    ];

    /// Substrings that must all be present for the line to match.
    pub fn signature(&self) -> &'static [&'static str] {
        match self {
            Marker::TrackAcquired => &["Got track ID="],
            Marker::TrackName => &["Track name:"],
            Marker::PlaybackFinished => &["Playing done"],
            Marker::NewTrackId => &["new track id", "=>"],
            Marker::TrackDuration => &["Track duration:"],
        }
    }

    pub fn role(&self) -> MarkerRole {
        match self {
            Marker::TrackAcquired => MarkerRole::Start,
            Marker::TrackName => MarkerRole::StartWhenIdle,
            Marker::PlaybackFinished => MarkerRole::End,
            Marker::NewTrackId | Marker::TrackDuration => MarkerRole::Metadata,
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        self.signature().iter().all(|needle| line.contains(needle))
    }

    /// Pull the marker's value out of a matching line, trimmed.
    /// Returns `None` for markers that carry no value, for lines that do not
    /// match, and for empty values.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        if !self.matches(line) {
            return None;
        }

        let pattern = match self {
            Marker::TrackName => &*TRACK_NAME_VALUE,
            Marker::NewTrackId => &*NEW_TRACK_ID_VALUE,
            Marker::TrackDuration => &*TRACK_DURATION_VALUE,
            Marker::TrackAcquired | Marker::PlaybackFinished => return None,
        };

        pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|value| !value.is_empty())
    }
}
