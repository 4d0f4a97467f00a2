use serde::{Deserialize, Serialize};

/// One timed caption unit. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl CaptionEntry {
    /// End time of this entry in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Complete transcript for one video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    /// Language code of the caption track the entries came from.
    pub language: String,
    pub entries: Vec<CaptionEntry>,
}

impl Transcript {
    /// Flattened plain text: entry texts joined with newlines, no metadata.
    pub fn text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Compact JSON array of the entries (text, start, duration).
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// 2-space-indented JSON array of the entries (text, start, duration).
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Format as SRT subtitles.
    pub fn to_srt(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}\n", i + 1));
            out.push_str(&format!(
                "{} --> {}\n",
                format_srt_time(entry.start),
                format_srt_time(entry.end())
            ));
            out.push_str(entry.text.trim());
            out.push_str("\n\n");
        }
        out
    }

    /// Format as WebVTT subtitles.
    pub fn to_vtt(&self) -> String {
        let mut out = String::from("WEBVTT\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "{} --> {}\n",
                format_vtt_time(entry.start),
                format_vtt_time(entry.end())
            ));
            out.push_str(entry.text.trim());
            out.push_str("\n\n");
        }
        out
    }

    /// Total covered time in seconds (end of the last entry).
    pub fn duration(&self) -> f64 {
        self.entries.last().map(CaptionEntry::end).unwrap_or(0.0)
    }
}

/// Format seconds as SRT timestamp: HH:MM:SS,mmm
fn format_srt_time(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0) as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

/// Format seconds as VTT timestamp: HH:MM:SS.mmm
fn format_vtt_time(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0) as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transcript {
        Transcript {
            video_id: "abc123".into(),
            language: "en".into(),
            entries: vec![
                CaptionEntry {
                    text: "Never gonna give you up".into(),
                    start: 0.0,
                    duration: 2.5,
                },
                CaptionEntry {
                    text: "Never gonna let you down".into(),
                    start: 2.5,
                    duration: 3.0,
                },
            ],
        }
    }

    #[test]
    fn test_text_joins_entries_with_newlines() {
        let t = sample();
        assert_eq!(
            t.text(),
            "Never gonna give you up\nNever gonna let you down"
        );
    }

    #[test]
    fn test_text_empty_transcript() {
        let t = Transcript {
            video_id: "abc123".into(),
            language: "en".into(),
            entries: vec![],
        };
        assert_eq!(t.text(), "");
    }

    #[test]
    fn test_json_compact_is_single_line() {
        let t = sample();
        let json = t.to_json().unwrap();
        assert!(json.starts_with("[{\"text\""));
        assert!(!json.contains('\n'));
        let parsed: Vec<CaptionEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t.entries);
    }

    #[test]
    fn test_json_pretty_uses_two_space_indent() {
        let t = sample();
        let json = t.to_json_pretty().unwrap();
        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\"text\": \"Never gonna give you up\""));
        assert!(json.contains("\"start\": 0.0"));
        assert!(json.contains("\"duration\": 2.5"));
    }

    #[test]
    fn test_json_pretty_round_trips() {
        let t = sample();
        let json = t.to_json_pretty().unwrap();
        let parsed: Vec<CaptionEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t.entries);
    }

    #[test]
    fn test_srt_output() {
        let t = sample();
        let srt = t.to_srt();
        assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:02,500\n"));
        assert!(srt.contains("2\n00:00:02,500 --> 00:00:05,500\n"));
    }

    #[test]
    fn test_vtt_output() {
        let t = sample();
        let vtt = t.to_vtt();
        assert!(vtt.starts_with("WEBVTT\n\n"));
        assert!(vtt.contains("00:00:00.000 --> 00:00:02.500\n"));
    }

    #[test]
    fn test_srt_time_rollover() {
        assert_eq!(format_srt_time(3661.25), "01:01:01,250");
    }

    #[test]
    fn test_duration_is_end_of_last_entry() {
        let t = sample();
        assert!((t.duration() - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_duration_empty() {
        let t = Transcript {
            video_id: "abc123".into(),
            language: "en".into(),
            entries: vec![],
        };
        assert_eq!(t.duration(), 0.0);
    }
}
