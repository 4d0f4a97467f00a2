/// Options for transcript retrieval.
///
/// Defaults: English preferred, inline markup stripped from caption text.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Caption language codes in preference order (e.g. `["de", "en"]`).
    /// The first track matching a code wins; if none matches, the first
    /// track the video offers is used.
    pub languages: Vec<String>,
    /// Keep inline markup tags (`<i>`, `<b>`, ...) in caption text instead
    /// of stripping them.
    pub preserve_formatting: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            languages: vec!["en".into()],
            preserve_formatting: false,
        }
    }
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language preference order.
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn preserve_formatting(mut self, enabled: bool) -> Self {
        self.preserve_formatting = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefers_english() {
        let opts = FetchOptions::default();
        assert_eq!(opts.languages, vec!["en".to_string()]);
        assert!(!opts.preserve_formatting);
    }

    #[test]
    fn test_builder_languages() {
        let opts = FetchOptions::new().languages(["de", "en"]);
        assert_eq!(opts.languages, vec!["de".to_string(), "en".to_string()]);
    }

    #[test]
    fn test_builder_preserve_formatting() {
        let opts = FetchOptions::new().preserve_formatting(true);
        assert!(opts.preserve_formatting);
    }
}
