//! Variant A: flattened plain-text transcript, confirmation printed on
//! success.
//!
//! Example:
//!   yt-transcript --video_id dQw4w9WgXcQ

use clap::Parser;
use tracing::debug;
use yt_transcript::Error;
use yt_transcript_cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    yt_transcript_cli::init_logging();
    debug!(working_directory = %cli.working_directory, "flag accepted but not applied");

    let Some(video_id) = cli.provided_video_id() else {
        println!("Please provide a video ID using the --video_id argument.");
        return;
    };

    match yt_transcript::fetch_transcript(video_id).await {
        Ok(transcript) => {
            if let Err(e) = std::fs::write(&cli.outfile, transcript.text()) {
                println!("An error occurred: {e}");
                return;
            }
            println!("Transcript written to {}", cli.outfile);
        }
        Err(Error::VideoUnavailable { .. }) => {
            println!("Error: Video with ID '{video_id}' is unavailable.");
        }
        Err(Error::NoTranscriptFound { .. }) => {
            println!("Error: No transcript found for video with ID '{video_id}'.");
        }
        Err(e) => {
            println!("An error occurred: {e}");
        }
    }
}
