//! YouTube transcript library — video ID in, timed caption entries out.
//!
//! **yt-transcript** fetches the caption track YouTube already serves for a
//! video (no API key, no audio processing) and exposes it as an ordered
//! sequence of timed [`CaptionEntry`] values. Output as plain text, indented
//! JSON, SRT, or WebVTT.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> yt_transcript::Result<()> {
//! let transcript = yt_transcript::fetch_transcript("dQw4w9WgXcQ").await?;
//! println!("{}", transcript.text());
//!
//! // Or with a language preference
//! let opts = yt_transcript::FetchOptions::new().languages(["de", "en"]);
//! let transcript = yt_transcript::fetch_transcript_with_options("dQw4w9WgXcQ", &opts).await?;
//! println!("{}", transcript.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub(crate) mod fetch;
pub mod types;

pub use config::FetchOptions;
pub use error::{Error, Result};
pub use types::{CaptionEntry, Transcript};

/// Fetch the transcript for a video ID with default options.
pub async fn fetch_transcript(video_id: &str) -> Result<Transcript> {
    fetch_transcript_with_options(video_id, &FetchOptions::default()).await
}

/// Fetch the transcript for a video ID with custom options.
pub async fn fetch_transcript_with_options(
    video_id: &str,
    options: &FetchOptions,
) -> Result<Transcript> {
    fetch::fetch(video_id, options).await
}
