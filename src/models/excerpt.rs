use serde::{Deserialize, Serialize};

use super::episode::Completion;

/// Placeholder used when a title or duration cannot be found.
pub const UNKNOWN: &str = "Unknown";

/// Inclusive line range exported around the selected episodes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContextWindow {
    pub start: usize,
    pub end: usize,
}

impl ContextWindow {
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSummary {
    /// 1-based position among the selected episodes.
    pub ordinal: usize,
    pub start: usize,
    pub end: usize,
    pub title: String,
    pub duration: String,
    pub completion: Completion,
}

impl EpisodeSummary {
    /// `Foo (5.0s) - COMPLETE`
    pub fn describe(&self) -> String {
        format!("{} ({}) - {}", self.title, self.duration, self.completion)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Excerpt {
    pub window: ContextWindow,
    pub requested: usize,
    pub found: usize,
    pub episodes: Vec<EpisodeSummary>,
    /// Sanitized lines of the window, in source order.
    #[serde(skip)]
    pub lines: Vec<String>,
}

impl Excerpt {
    pub fn selected(&self) -> usize {
        self.episodes.len()
    }

    /// Fewer episodes exist than were asked for.
    pub fn is_short(&self) -> bool {
        self.selected() < self.requested
    }

    /// The window as one `\n`-terminated block of text.
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_matches_report_format() {
        let summary = EpisodeSummary {
            ordinal: 1,
            start: 1,
            end: 5,
            title: "Foo".into(),
            duration: "5.0s".into(),
            completion: Completion::Complete,
        };
        assert_eq!(summary.describe(), "Foo (5.0s) - COMPLETE");
    }

    #[test]
    fn text_terminates_every_line() {
        let excerpt = Excerpt {
            window: ContextWindow { start: 0, end: 1 },
            requested: 2,
            found: 1,
            episodes: Vec::new(),
            lines: vec!["a".into(), "b".into()],
        };
        assert_eq!(excerpt.text(), "a\nb\n");
        assert_eq!(excerpt.window.line_count(), 2);
    }
}
