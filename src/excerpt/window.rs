use crate::models::{ContextWindow, Episode};

/// The trailing `want` episodes, in their original order.
pub fn select_trailing(episodes: &[Episode], want: usize) -> &[Episode] {
    let take = want.min(episodes.len());
    &episodes[episodes.len() - take..]
}

/// Contiguous window from the first selected start to the last selected end,
/// padded by `margin` on both sides and clamped to `[0, line_count - 1]`.
///
/// Returns `None` when nothing is selected or there are no lines.
pub fn context_window(
    selected: &[Episode],
    line_count: usize,
    margin: usize,
) -> Option<ContextWindow> {
    let first = selected.first()?;
    let last = selected.last()?;
    let last_index = line_count.checked_sub(1)?;

    let start = first.start.saturating_sub(margin).min(last_index);
    let end = last.end.saturating_add(margin).min(last_index);

    Some(ContextWindow {
        start,
        end: end.max(start),
    })
}
