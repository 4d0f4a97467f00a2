//! Shared argument surface for the two transcript CLI variants.
//!
//! Both binaries accept the same flags; they differ only in how they render
//! the transcript and whether they confirm a successful write. Each keeps
//! its own fetch/format/write flow in its own `main`.

use clap::Parser;

/// Fetch a YouTube transcript and write it to a file.
#[derive(Parser, Debug)]
#[command(about = "Fetch a YouTube transcript and write it to a file")]
pub struct Cli {
    /// ID of the YouTube video.
    #[arg(long = "video_id")]
    pub video_id: Option<String>,

    /// Output file for the transcript.
    #[arg(long, default_value_t = default_outfile())]
    pub outfile: String,

    /// Working directory for the run. Accepted for compatibility with the
    /// original flag set and logged, but never applied.
    #[arg(long = "working-directory", default_value_t = default_working_directory())]
    pub working_directory: String,
}

impl Cli {
    /// The video ID, treating an empty or blank flag value as not supplied,
    /// the same way the guidance guard always has.
    pub fn provided_video_id(&self) -> Option<&str> {
        self.video_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Timestamp-derived default output name, fixed at argument-parse time.
pub fn default_outfile() -> String {
    chrono::Local::now().format("%Y%m%d-%H%M%S").to_string() + "_output.txt"
}

pub fn default_working_directory() -> String {
    std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| ".".into())
}

/// Route logs to stderr so stdout carries only the user-facing messages.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("yt_transcript=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_video_id_flag_uses_underscore() {
        let cli = Cli::try_parse_from(["prog", "--video_id", "dQw4w9WgXcQ"]).unwrap();
        assert_eq!(cli.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_video_id_is_optional() {
        let cli = Cli::try_parse_from(["prog"]).unwrap();
        assert!(cli.video_id.is_none());
        assert!(cli.provided_video_id().is_none());
    }

    #[test]
    fn test_empty_video_id_counts_as_missing() {
        let cli = Cli::try_parse_from(["prog", "--video_id", ""]).unwrap();
        assert!(cli.provided_video_id().is_none());
    }

    #[test]
    fn test_blank_video_id_counts_as_missing() {
        let cli = Cli::try_parse_from(["prog", "--video_id", "   "]).unwrap();
        assert!(cli.provided_video_id().is_none());
    }

    #[test]
    fn test_provided_video_id_trims() {
        let cli = Cli::try_parse_from(["prog", "--video_id", " dQw4w9WgXcQ "]).unwrap();
        assert_eq!(cli.provided_video_id(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_outfile_override() {
        let cli = Cli::try_parse_from(["prog", "--outfile", "out.txt"]).unwrap();
        assert_eq!(cli.outfile, "out.txt");
    }

    #[test]
    fn test_working_directory_flag_accepted() {
        let cli =
            Cli::try_parse_from(["prog", "--working-directory", "/tmp"]).unwrap();
        assert_eq!(cli.working_directory, "/tmp");
    }

    #[test]
    fn test_default_outfile_shape() {
        let name = default_outfile();
        // <YYYYMMDD>-<HHMMSS>_output.txt
        assert_eq!(name.len(), "YYYYMMDD-HHMMSS_output.txt".len());
        assert!(name.ends_with("_output.txt"));
        let stamp = &name[..15];
        assert_eq!(stamp.as_bytes()[8], b'-');
        assert_eq!(stamp.chars().filter(|c| c.is_ascii_digit()).count(), 14);
    }

    #[test]
    fn test_default_outfile_is_applied() {
        let cli = Cli::try_parse_from(["prog"]).unwrap();
        assert!(cli.outfile.ends_with("_output.txt"));
    }

    #[test]
    fn test_outfile_write_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "a much longer first transcript").unwrap();
        std::fs::write(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }
}
