mod episode;
mod excerpt;

pub use episode::{Completion, Episode};
pub use excerpt::{ContextWindow, EpisodeSummary, Excerpt, UNKNOWN};
