use serde::Serialize;
use std::path::Path;

use crate::clipboard::ClipboardOutcome;
use crate::models::{ContextWindow, EpisodeSummary, Excerpt};

pub fn reading_line(log_path: &Path) -> String {
    format!("Reading log file: {}", log_path.display())
}

pub fn found_line(found: usize) -> String {
    format!("Found {found} song play(s)")
}

pub fn shortfall_line(requested: usize) -> String {
    format!("Warning: Less than {requested} complete song plays found")
}

/// Lines describing what was written and where.
pub fn extraction_lines(excerpt: &Excerpt, output_path: &Path, margin: usize) -> Vec<String> {
    let window = excerpt.window;
    vec![
        format!(
            "Extracted last {} song play(s) to: {}",
            excerpt.selected(),
            output_path.display()
        ),
        format!(
            "Log segment: lines {} to {} ({} lines)",
            window.start,
            window.end,
            window.line_count()
        ),
        format!("  (includes {margin} lines context before and after)"),
    ]
}

pub fn clipboard_line(outcome: &ClipboardOutcome) -> String {
    match outcome {
        ClipboardOutcome::Copied { .. } => "✓ Copied to clipboard".to_string(),
        ClipboardOutcome::Missing {
            program,
            install_hint,
        } => format!("  ({program} not found - {install_hint})"),
        ClipboardOutcome::Failed { reason, .. } => {
            format!("  (Failed to copy to clipboard: {reason})")
        }
    }
}

/// `  Song 1: Foo (5.0s) - COMPLETE`
pub fn episode_lines(episodes: &[EpisodeSummary]) -> Vec<String> {
    episodes
        .iter()
        .map(|summary| format!("  Song {}: {}", summary.ordinal, summary.describe()))
        .collect()
}

/// Machine-readable form of a run, printed with `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub log_path: &'a Path,
    pub output_path: Option<&'a Path>,
    pub found: usize,
    pub requested: usize,
    pub window: Option<ContextWindow>,
    pub episodes: &'a [EpisodeSummary],
    pub clipboard: Option<String>,
}
