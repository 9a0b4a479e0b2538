/// Fixed knobs for excerpt building.
#[derive(Debug, Clone)]
pub struct ExcerptConfig {
    /// How many trailing episodes to export
    pub episode_count: usize,

    /// Lines of context kept before the first and after the last episode
    pub context_margin: usize,

    /// Title and duration are only looked for this far into an episode
    pub metadata_scan_lines: usize,
}

pub const EPISODE_COUNT: usize = 2;
pub const CONTEXT_MARGIN: usize = 10;
pub const METADATA_SCAN_LINES: usize = 50;

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            episode_count: EPISODE_COUNT,
            context_margin: CONTEXT_MARGIN,
            metadata_scan_lines: METADATA_SCAN_LINES,
        }
    }
}
