/// All errors that can occur in yt-transcript.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("video unavailable: {video_id}")]
    VideoUnavailable { video_id: String },

    #[error("no transcript found for video: {video_id}")]
    NoTranscriptFound { video_id: String },

    #[error("invalid video ID: {0}")]
    InvalidVideoId(String),

    #[error("unexpected page layout: {0}")]
    Parse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
