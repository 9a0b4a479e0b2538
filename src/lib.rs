mod clipboard;
mod error;
mod excerpt;
mod input;
mod models;
mod report;
mod segmentation;
mod settings;
mod utils;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

pub use clipboard::{copy_to_clipboard, default_commands, ClipboardCommand, ClipboardOutcome};
pub use error::Log2ClipError;
pub use excerpt::{build_excerpt, sanitize_line, sanitize_lines, ExcerptConfig};
pub use models::{Completion, ContextWindow, Episode, EpisodeSummary, Excerpt};
pub use segmentation::{segment, Marker};
pub use settings::{Args, ExtractSettings};

use report::JsonReport;

/// Console sink that stays quiet in `--json` mode.
struct Console<'a, W: Write> {
    out: &'a mut W,
    quiet: bool,
}

impl<W: Write> Console<'_, W> {
    fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}", line.as_ref())
    }

    fn say_all(&mut self, lines: Vec<String>) -> io::Result<()> {
        lines.into_iter().try_for_each(|line| self.say(line))
    }

    fn json(&mut self, report: &JsonReport<'_>) -> Result<()> {
        serde_json::to_writer_pretty(&mut *self.out, report)?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// One full run: read the log, segment it, write the excerpt, copy it to the
/// clipboard and report to `out`.
///
/// Only a missing/unreadable log or an unwritable output fail the run;
/// clipboard problems end up in the report.
pub fn extract<W: Write>(
    settings: &ExtractSettings,
    clipboard_commands: &[ClipboardCommand],
    out: &mut W,
) -> Result<()> {
    let mut console = Console {
        out,
        quiet: settings.json,
    };
    let config = &settings.excerpt;

    input::ensure_log_exists(&settings.log_path)?;
    console.say(report::reading_line(&settings.log_path))?;
    let lines = input::read_log_lines(&settings.log_path)?;
    log::info!("read {} lines from {}", lines.len(), settings.log_path.display());

    let episodes = segmentation::segment(&lines);
    console.say(report::found_line(episodes.len()))?;
    if episodes.len() < config.episode_count {
        console.say(report::shortfall_line(config.episode_count))?;
    }

    let Some(excerpt) = excerpt::build_excerpt(&lines, &episodes, config) else {
        console.say("No song plays to extract; nothing written")?;
        if settings.json {
            console.json(&JsonReport {
                log_path: &settings.log_path,
                output_path: None,
                found: 0,
                requested: config.episode_count,
                window: None,
                episodes: &[],
                clipboard: None,
            })?;
        }
        return Ok(());
    };

    let text = excerpt.text();
    input::write_excerpt(&settings.output_path, &text)?;
    console.say_all(report::extraction_lines(
        &excerpt,
        &settings.output_path,
        config.context_margin,
    ))?;

    let clipboard_status = if settings.clipboard {
        let outcome = clipboard::copy_to_clipboard(&text, clipboard_commands);
        let line = report::clipboard_line(&outcome);
        console.say(&line)?;
        Some(line.trim().to_string())
    } else {
        None
    };

    console.say_all(report::episode_lines(&excerpt.episodes))?;

    if settings.json {
        console.json(&JsonReport {
            log_path: &settings.log_path,
            output_path: Some(&settings.output_path),
            found: excerpt.found,
            requested: excerpt.requested,
            window: Some(excerpt.window),
            episodes: &excerpt.episodes,
            clipboard: clipboard_status,
        })?;
    }

    Ok(())
}

pub fn run() -> ExitCode {
    // Warnings and up by default; RUST_LOG overrides.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let settings = ExtractSettings::from(Args::parse());
    let stdout = io::stdout();

    match extract(&settings, &clipboard::default_commands(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            match err.downcast_ref::<Log2ClipError>() {
                Some(known) => known.exit_code(),
                None => ExitCode::FAILURE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const LOG: &str = "\
boot
\x1b[32mI\x1b[0m Got track ID=1
Track name: First
Track duration: 1000
Playing done
Got track ID=2
new track id 2 => <Second>
Track duration: 12345
Playing done
tail
";

    fn settings(dir: &Path, json: bool) -> ExtractSettings {
        ExtractSettings {
            log_path: dir.join("spotupnp.log"),
            output_path: dir.join("sce.log"),
            clipboard: false,
            json,
            excerpt: ExcerptConfig::default(),
        }
    }

    fn run_extract(settings: &ExtractSettings) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = extract(settings, &[], &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn writes_clean_excerpt_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), false);
        fs::write(&settings.log_path, LOG).unwrap();

        let (result, stdout) = run_extract(&settings);
        result.unwrap();

        let written = fs::read_to_string(&settings.output_path).unwrap();
        assert!(written.starts_with("boot\nI Got track ID=1\n"));
        assert!(!written.contains('\x1b'));
        assert_eq!(written.lines().count(), 10);

        assert!(stdout.contains("Found 2 song play(s)"));
        assert!(!stdout.contains("Warning"));
        assert!(stdout.contains("Log segment: lines 0 to 9 (10 lines)"));
        assert!(stdout.contains("  Song 1: First (1.0s) - COMPLETE"));
        assert!(stdout.contains("  Song 2: Second (12.3s) - COMPLETE"));
    }

    #[test]
    fn missing_log_fails_with_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), false);

        let (result, stdout) = run_extract(&settings);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Log2ClipError>(),
            Some(Log2ClipError::LogNotFound(_))
        ));
        assert!(stdout.is_empty(), "{stdout}");
        assert!(!settings.output_path.exists());
    }

    #[test]
    fn no_episodes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), false);
        fs::write(&settings.log_path, "boot\nidle\n").unwrap();

        let (result, stdout) = run_extract(&settings);
        result.unwrap();
        assert!(stdout.contains("Found 0 song play(s)"));
        assert!(stdout.contains("Warning: Less than 2 complete song plays found"));
        assert!(!settings.output_path.exists());
    }

    #[test]
    fn json_mode_prints_only_json() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), true);
        fs::write(&settings.log_path, LOG).unwrap();

        let (result, stdout) = run_extract(&settings);
        result.unwrap();

        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["found"], 2);
        assert_eq!(value["episodes"][0]["title"], "First");
        assert_eq!(value["episodes"][1]["duration"], "12.3s");
        assert!(value["clipboard"].is_null());
    }
}
