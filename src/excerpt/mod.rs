pub mod config;
pub mod metadata;
pub mod sanitize;
pub mod window;

pub use config::ExcerptConfig;
pub use sanitize::{sanitize_line, sanitize_lines};

use crate::models::{Episode, EpisodeSummary, Excerpt};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Build the exported excerpt from segmented episodes.
///
/// Takes the trailing `config.episode_count` episodes (or all of them when
/// there are fewer), pads their span by `config.context_margin`, sanitizes
/// the window and summarizes each selected episode. Returns `None` when no
/// episodes were found.
pub fn build_excerpt<S: AsRef<str>>(
    lines: &[S],
    episodes: &[Episode],
    config: &ExcerptConfig,
) -> Option<Excerpt> {
    let selected = window::select_trailing(episodes, config.episode_count);
    let window = window::context_window(selected, lines.len(), config.context_margin)?;

    if selected.len() < config.episode_count {
        log_info!(
            "[excerpt] wanted {} episode(s), only {} available",
            config.episode_count,
            selected.len()
        );
    }

    log_debug!(
        "[excerpt] window {}..={} covers {} episode(s)",
        window.start,
        window.end,
        selected.len()
    );

    let summaries = selected
        .iter()
        .enumerate()
        .map(|(i, episode)| summarize(i + 1, episode, lines, config))
        .collect();

    Some(Excerpt {
        window,
        requested: config.episode_count,
        found: episodes.len(),
        episodes: summaries,
        lines: sanitize_lines(&lines[window.start..=window.end]),
    })
}

fn summarize<S: AsRef<str>>(
    ordinal: usize,
    episode: &Episode,
    lines: &[S],
    config: &ExcerptConfig,
) -> EpisodeSummary {
    let slice = episode.slice(lines);
    let (title, duration) = metadata::describe(slice, config.metadata_scan_lines);

    EpisodeSummary {
        ordinal,
        start: episode.start,
        end: episode.end,
        title,
        duration,
        completion: metadata::completion(slice),
    }
}
