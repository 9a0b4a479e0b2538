use crate::models::{Completion, Episode};
use crate::segmentation::markers::{Marker, MarkerRole};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// What a single line does to the scan, after precedence is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Open,
    Close,
    None,
}

/// Cursor carried through the scan.
#[derive(Debug, Default)]
struct SegmentationState {
    current_start: Option<usize>,
    in_episode: bool,
}

impl SegmentationState {
    fn classify(&self, line: &str) -> Transition {
        let mut opens = false;
        let mut closes = false;

        for marker in Marker::ALL {
            let role = marker.role();
            if role == MarkerRole::Metadata || !marker.matches(line) {
                continue;
            }
            match role {
                MarkerRole::Start => opens = true,
                MarkerRole::StartWhenIdle if !self.in_episode => opens = true,
                MarkerRole::End if self.in_episode => closes = true,
                _ => {}
            }
        }

        // A start on the same line as an end wins.
        if opens {
            Transition::Open
        } else if closes {
            Transition::Close
        } else {
            Transition::None
        }
    }

    fn open(&mut self, index: usize, episodes: &mut Vec<Episode>) {
        if self.in_episode {
            if let Some(start) = self.current_start {
                // Closed on the line before the new start.
                let end = index - 1;
                log_debug!(
                    "[segmentation] start at line {} while episode {} is open; force-closing at {}",
                    index,
                    start,
                    end
                );
                episodes.push(Episode::new(start, end, Completion::Incomplete));
            }
        }
        self.current_start = Some(index);
        self.in_episode = true;
    }

    fn close(&mut self, index: usize, episodes: &mut Vec<Episode>) {
        if let Some(start) = self.current_start.take() {
            episodes.push(Episode::new(start, index, Completion::Complete));
        }
        self.in_episode = false;
    }

    fn finish(self, line_count: usize, episodes: &mut Vec<Episode>) {
        if let Some(start) = self.current_start {
            let end = line_count.saturating_sub(1).max(start);
            log_debug!(
                "[segmentation] flushing trailing episode {}..={} as incomplete",
                start,
                end
            );
            episodes.push(Episode::new(start, end, Completion::Incomplete));
        }
    }
}

/// Split a log into song-play episodes in a single forward pass.
///
/// An episode opens on `Got track ID=` (or on `Track name:` when nothing is
/// open) and closes on the next `Playing done`. Opening while another episode
/// is still open closes the previous one at the line before the new start.
/// A trailing open episode is reported as incomplete. Returned episodes are
/// ordered by start and never overlap.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Episode> {
    let mut episodes = Vec::new();
    let mut state = SegmentationState::default();

    for (index, line) in lines.iter().enumerate() {
        match state.classify(line.as_ref()) {
            Transition::Open => state.open(index, &mut episodes),
            Transition::Close => state.close(index, &mut episodes),
            Transition::None => {}
        }
    }

    state.finish(lines.len(), &mut episodes);

    log_info!(
        "[segmentation] {} lines -> {} episode(s)",
        lines.len(),
        episodes.len()
    );

    episodes
}
