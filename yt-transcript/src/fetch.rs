use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::FetchOptions;
use crate::error::{Error, Result};
use crate::types::{CaptionEntry, Transcript};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

// YouTube serves a reduced page (without the embedded player response) to
// clients it does not recognize as browsers.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

// The captions object inside the embedded player response. It is always
// followed by the videoDetails key, which bounds the slice we hand to serde.
const CAPTIONS_KEY: &str = "\"captions\":";
const VIDEO_DETAILS_KEY: &str = ",\"videoDetails\"";

static PLAYABILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""playabilityStatus":\s*\{"status":"([A-Z_]+)""#).expect("valid regex")
});

static TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<text start="([\d.]+)"(?: dur="([\d.]+)")?[^>]*>(.*?)</text>"#)
        .expect("valid regex")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

#[derive(Deserialize)]
struct CaptionsJson {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    renderer: Option<TracklistRenderer>,
}

#[derive(Deserialize)]
struct TracklistRenderer {
    #[serde(rename = "captionTracks", default)]
    caption_tracks: Vec<CaptionTrack>,
}

/// One caption track offered by a video, as listed in the player response.
#[derive(Debug, Clone, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
    /// "asr" marks an auto-generated track.
    #[serde(default)]
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Fetch and parse the transcript for one video.
pub(crate) async fn fetch(video_id: &str, options: &FetchOptions) -> Result<Transcript> {
    validate_video_id(video_id)?;

    info!(%video_id, "fetching transcript");

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let html = client
        .get(format!("{WATCH_URL}{video_id}"))
        .header(
            reqwest::header::ACCEPT_LANGUAGE,
            accept_language(&options.languages),
        )
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let tracks = extract_caption_tracks(&html, video_id)?;
    let track = select_track(&tracks, &options.languages).ok_or_else(|| {
        Error::NoTranscriptFound {
            video_id: video_id.to_string(),
        }
    })?;

    debug!(language = %track.language_code, generated = track.is_generated(), "selected caption track");

    let xml = client
        .get(&track.base_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let entries = parse_timedtext(&xml, options.preserve_formatting);
    if entries.is_empty() {
        return Err(Error::NoTranscriptFound {
            video_id: video_id.to_string(),
        });
    }

    info!(
        entries = entries.len(),
        language = %track.language_code,
        "transcript fetched"
    );

    Ok(Transcript {
        video_id: video_id.to_string(),
        language: track.language_code.clone(),
        entries,
    })
}

/// Reject inputs that cannot be a video ID, most commonly a pasted URL.
fn validate_video_id(video_id: &str) -> Result<()> {
    let trimmed = video_id.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidVideoId("empty video ID".into()));
    }
    if trimmed.contains("://") || trimmed.contains('/') || trimmed.contains(char::is_whitespace) {
        return Err(Error::InvalidVideoId(format!(
            "\"{trimmed}\" looks like a URL, pass the video ID instead"
        )));
    }
    Ok(())
}

fn accept_language(languages: &[String]) -> String {
    match languages.first() {
        Some(lang) => format!("{lang},en;q=0.7"),
        None => "en-US,en".to_string(),
    }
}

/// Slice the captions object out of the watch page and deserialize its
/// track list. A page without one is classified via the playability status.
fn extract_caption_tracks(html: &str, video_id: &str) -> Result<Vec<CaptionTrack>> {
    let Some(start) = html.find(CAPTIONS_KEY) else {
        return Err(classify_missing_captions(html, video_id));
    };
    let tail = &html[start + CAPTIONS_KEY.len()..];
    let Some(end) = tail.find(VIDEO_DETAILS_KEY) else {
        return Err(Error::Parse(
            "captions object not followed by videoDetails".into(),
        ));
    };

    let captions: CaptionsJson = serde_json::from_str(tail[..end].trim())?;
    let tracks = captions
        .renderer
        .map(|r| r.caption_tracks)
        .unwrap_or_default();

    if tracks.is_empty() {
        return Err(Error::NoTranscriptFound {
            video_id: video_id.to_string(),
        });
    }
    Ok(tracks)
}

/// A watch page without a captions object is either a dead video or a video
/// that simply has no transcript. The playability status tells them apart.
fn classify_missing_captions(html: &str, video_id: &str) -> Error {
    let status = PLAYABILITY_RE
        .captures(html)
        .map(|cap| cap[1].to_string())
        .unwrap_or_default();

    debug!(%video_id, %status, "watch page has no captions object");

    match status.as_str() {
        "ERROR" | "LOGIN_REQUIRED" | "UNPLAYABLE" => Error::VideoUnavailable {
            video_id: video_id.to_string(),
        },
        _ => Error::NoTranscriptFound {
            video_id: video_id.to_string(),
        },
    }
}

/// Pick a track by language preference order. Within a language, manually
/// created tracks win over auto-generated ones. No preference matches:
/// take whatever the video offers first.
fn select_track<'a>(tracks: &'a [CaptionTrack], languages: &[String]) -> Option<&'a CaptionTrack> {
    for lang in languages {
        if let Some(track) = tracks
            .iter()
            .find(|t| t.language_code == *lang && !t.is_generated())
        {
            return Some(track);
        }
        if let Some(track) = tracks.iter().find(|t| t.language_code == *lang) {
            return Some(track);
        }
    }
    tracks.first()
}

/// Parse timedtext XML into caption entries.
///
/// Entity references are decoded first; inline markup (which arrives
/// escaped) is then stripped unless `preserve_formatting` is set. Entries
/// that are empty after cleanup are dropped.
fn parse_timedtext(xml: &str, preserve_formatting: bool) -> Vec<CaptionEntry> {
    TEXT_RE
        .captures_iter(xml)
        .filter_map(|cap| {
            let start: f64 = cap[1].parse().ok()?;
            let duration: f64 = match cap.get(2) {
                Some(m) => m.as_str().parse().ok()?,
                None => 0.0,
            };

            let mut text = unescape_entities(&cap[3]);
            if !preserve_formatting {
                text = TAG_RE.replace_all(&text, "").into_owned();
            }
            let text = text.trim().to_string();
            if text.is_empty() {
                return None;
            }

            Some(CaptionEntry {
                text,
                start,
                duration,
            })
        })
        .collect()
}

/// Decode the XML/HTML entity references timedtext uses. Unknown references
/// pass through untouched.
fn unescape_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match rest[1..].find(';') {
            Some(len) if len > 0 && len <= 8 => {
                let body = &rest[1..1 + len];
                match decode_entity(body) {
                    Some(decoded) => {
                        out.push(decoded);
                        rest = &rest[len + 2..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
                .map(|hex| u32::from_str_radix(hex, 16))
                .or_else(|| body.strip_prefix('#').map(|dec| dec.parse::<u32>()))?
                .ok()?;
            char::from_u32(code)
        }
    }
}
