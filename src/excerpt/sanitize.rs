use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

// full: ESC [ params m
// bare: ESC directly before '[' (the bracket is kept)
// orphan: [ params m at line start whose ESC was lost, possibly repeated
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<full>\x1b\[[0-9;]*m)|(?P<bare>\x1b)\[|(?P<orphan>^(?:\[[0-9;]*m)+)")
        .expect("static regex")
});

static COLOR_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("static regex"));

/// Remove only complete `ESC [ params m` sequences, wherever they are.
/// Bracketed text without its escape byte is kept.
pub fn strip_color_sequences(line: &str) -> Cow<'_, str> {
    COLOR_SEQUENCE.replace_all(line, "")
}

fn strip_once(line: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(line, |caps: &Captures| {
        if caps.name("bare").is_some() {
            "["
        } else {
            ""
        }
    })
}

/// Remove terminal color codes from one line.
///
/// Applied until nothing changes, so sanitizing sanitized text is a no-op.
/// Text that is not part of an escape sequence is left as is.
pub fn sanitize_line(line: &str) -> Cow<'_, str> {
    let mut current = strip_once(line);
    loop {
        let changed = match strip_once(&current) {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        match changed {
            Some(next) => current = Cow::Owned(next),
            None => return current,
        }
    }
}

/// Sanitize every line, keeping count and order.
pub fn sanitize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| sanitize_line(line.as_ref()).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_full_sequences() {
        assert_eq!(
            sanitize_line("\x1b[32mI\x1b[0m spirc.cpp: Playing done"),
            "I spirc.cpp: Playing done"
        );
        assert_eq!(sanitize_line("\x1b[1;31merror\x1b[m"), "error");
    }

    #[test]
    fn drops_bare_escape_before_bracket() {
        assert_eq!(sanitize_line("\x1b[2Kprogress"), "[2Kprogress");
    }

    #[test]
    fn keeps_escape_not_followed_by_bracket() {
        assert_eq!(sanitize_line("a\x1bb"), "a\x1bb");
    }

    #[test]
    fn strips_orphaned_sequence_at_line_start() {
        assert_eq!(sanitize_line("[0m"), "");
        assert_eq!(sanitize_line("[0;32mGot track ID=1"), "Got track ID=1");
    }

    #[test]
    fn leaves_bracketed_prose_alone() {
        assert_eq!(
            sanitize_line("normal [not a code] text"),
            "normal [not a code] text"
        );
        assert_eq!(sanitize_line("mid-line [0m stays"), "mid-line [0m stays");
        assert!(matches!(sanitize_line("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "[0m[0m[32mtext",
            "[\x1b[0m0mtext",
            "\x1b\x1b[0m",
            "\x1b[33mW\x1b[0m [FLOW] marker",
        ];
        for input in inputs {
            let once = sanitize_line(input).into_owned();
            let twice = sanitize_line(&once).into_owned();
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    #[test]
    fn color_sequences_only_touch_full_escapes() {
        assert_eq!(
            strip_color_sequences("\x1b[32mTrack name: Beta\x1b[0m"),
            "Track name: Beta"
        );
        assert_eq!(
            strip_color_sequences("[0mTrack name: [1mRemix"),
            "[0mTrack name: [1mRemix"
        );
    }

    #[test]
    fn preserves_line_count_and_order() {
        let lines = vec!["\x1b[0ma".to_string(), "b".to_string(), "[0m".to_string()];
        assert_eq!(sanitize_lines(&lines), vec!["a", "b", ""]);
    }
}
