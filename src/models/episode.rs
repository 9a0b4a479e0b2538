use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Completion {
    Complete,
    Incomplete,
}

impl Completion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Completion::Complete => "COMPLETE",
            Completion::Incomplete => "INCOMPLETE",
        }
    }

    pub fn from_finished(finished: bool) -> Self {
        if finished {
            Completion::Complete
        } else {
            Completion::Incomplete
        }
    }
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One song play: an inclusive range of line indices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub start: usize,
    pub end: usize,
    /// Whether the segmenter closed this episode on a "Playing done" line.
    /// Force-closed and trailing episodes are incomplete.
    pub completion: Completion,
}

impl Episode {
    pub fn new(start: usize, end: usize, completion: Completion) -> Self {
        debug_assert!(start <= end, "episode start {start} past end {end}");
        Self {
            start,
            end,
            completion,
        }
    }

    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// The episode's lines, clamped to the slice in case it is shorter.
    pub fn slice<'a, S>(&self, lines: &'a [S]) -> &'a [S] {
        let end = (self.end + 1).min(lines.len());
        let start = self.start.min(end);
        &lines[start..end]
    }
}
