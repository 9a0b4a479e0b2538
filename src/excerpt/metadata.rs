use crate::excerpt::sanitize::strip_color_sequences;
use crate::models::{Completion, UNKNOWN};
use crate::segmentation::Marker;

/// Title from the first line, within `scan_lines`, that names the track.
/// `Track name:` lines are not also tried as `new track id` lines.
pub fn find_title<S: AsRef<str>>(lines: &[S], scan_lines: usize) -> Option<String> {
    lines.iter().take(scan_lines).find_map(|line| {
        // Colored lines would otherwise leave a trailing ESC[0m in the title.
        let line = strip_color_sequences(line.as_ref());
        let value = if Marker::TrackName.matches(&line) {
            Marker::TrackName.extract(&line)
        } else {
            Marker::NewTrackId.extract(&line)
        };
        value.map(str::to_string)
    })
}

/// Track duration in milliseconds from the first `Track duration:` line.
pub fn find_duration_ms<S: AsRef<str>>(lines: &[S], scan_lines: usize) -> Option<u64> {
    lines
        .iter()
        .take(scan_lines)
        .find_map(|line| Marker::TrackDuration.extract(line.as_ref())?.parse().ok())
}

/// `12345` -> `12.3s`
pub fn format_duration(ms: u64) -> String {
    format!("{:.1}s", ms as f64 / 1000.0)
}

/// Complete if any line of the episode, not just the scanned head, says
/// playback finished.
pub fn completion<S: AsRef<str>>(lines: &[S]) -> Completion {
    Completion::from_finished(
        lines
            .iter()
            .any(|line| Marker::PlaybackFinished.matches(line.as_ref())),
    )
}

/// Title and formatted duration, falling back to `Unknown`.
pub fn describe<S: AsRef<str>>(lines: &[S], scan_lines: usize) -> (String, String) {
    let title = find_title(lines, scan_lines).unwrap_or_else(|| UNKNOWN.to_string());
    let duration = find_duration_ms(lines, scan_lines)
        .map(format_duration)
        .unwrap_or_else(|| UNKNOWN.to_string());
    (title, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_whichever_comes_first() {
        let lines = [
            "Got track ID=1",
            "new track id abc => <From Id>",
            "Track name: From Name",
        ];
        assert_eq!(find_title(&lines, 50).as_deref(), Some("From Id"));

        let lines = ["Track name: From Name", "new track id abc => <From Id>"];
        assert_eq!(find_title(&lines, 50).as_deref(), Some("From Name"));
    }

    #[test]
    fn title_only_scans_the_head() {
        let mut lines = vec!["chunk".to_string(); 50];
        lines.push("Track name: Too Late".to_string());
        assert_eq!(find_title(&lines, 50), None);
        assert_eq!(find_title(&lines, 51).as_deref(), Some("Too Late"));
    }

    #[test]
    fn blank_track_name_falls_through_to_later_lines() {
        let lines = ["Track name:  ", "new track id x => <Later>"];
        assert_eq!(find_title(&lines, 50).as_deref(), Some("Later"));
    }

    #[test]
    fn title_drops_trailing_color_codes() {
        let lines = ["\x1b[32mTrack name: Beta\x1b[0m"];
        assert_eq!(find_title(&lines, 50).as_deref(), Some("Beta"));
    }

    #[test]
    fn title_keeps_bracketed_text_without_escape() {
        let lines = ["Track name: [1mRemix"];
        assert_eq!(find_title(&lines, 50).as_deref(), Some("[1mRemix"));
    }

    #[test]
    fn duration_stops_at_first_match() {
        let lines = [
            "Got track ID=1",
            "Track duration: 5000",
            "Track duration: 9000",
        ];
        assert_eq!(find_duration_ms(&lines, 50), Some(5000));
        assert_eq!(describe(&lines, 50).1, "5.0s");
    }

    #[test]
    fn duration_is_formatted_with_one_decimal() {
        assert_eq!(format_duration(12345), "12.3s");
        assert_eq!(format_duration(5000), "5.0s");
        assert_eq!(format_duration(0), "0.0s");
    }

    #[test]
    fn duration_skips_unparseable_values() {
        let lines = ["Track duration: 99999999999999999999999", "Track duration: 1500"];
        assert_eq!(find_duration_ms(&lines, 50), Some(1500));
    }

    #[test]
    fn completion_looks_past_the_head() {
        let mut lines = vec!["chunk".to_string(); 80];
        assert_eq!(completion(&lines), Completion::Incomplete);
        lines.push("Playing done".to_string());
        assert_eq!(completion(&lines), Completion::Complete);
    }

    #[test]
    fn describe_defaults_to_unknown() {
        let lines = ["Got track ID=1", "Playing done"];
        assert_eq!(
            describe(&lines, 50),
            ("Unknown".to_string(), "Unknown".to_string())
        );
    }
}
