use std::sync::OnceLock;

use regex::Regex;

pub(crate) struct TextPatterns {
    url: Regex,
    mention: Regex,
    hashtag: Regex,
    non_word: Regex,
    whitespace: Regex,
    /// Two or more word characters.
    pub(crate) token: Regex,
}

fn build_text_patterns() -> Option<TextPatterns> {
    Some(TextPatterns {
        url: Regex::new(r"https?://\S+").ok()?,
        mention: Regex::new(r"@[a-zA-Z0-9_]+").ok()?,
        hashtag: Regex::new(r"#[a-zA-Z0-9_]+").ok()?,
        non_word: Regex::new(r"[^\w\s]").ok()?,
        whitespace: Regex::new(r"\s+").ok()?,
        token: Regex::new(r"\b\w\w+\b").ok()?,
    })
}

pub(crate) fn text_patterns() -> Option<&'static TextPatterns> {
    static PATTERNS: OnceLock<Option<TextPatterns>> = OnceLock::new();
    PATTERNS.get_or_init(build_text_patterns).as_ref()
}

/// Normalize social text before vectorization.
///
/// Drops URLs, @mentions and #hashtags, turns punctuation into spaces,
/// collapses whitespace and lowercases. Candidate and corpus texts must go
/// through the same function.
pub fn preprocess(content: &str) -> String {
    let Some(p) = text_patterns() else {
        return content.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    };

    let text = p.url.replace_all(content, "");
    let text = p.mention.replace_all(&text, "");
    let text = p.hashtag.replace_all(&text, "");
    let text = p.non_word.replace_all(&text, " ");
    let text = p.whitespace.replace_all(&text, " ");

    text.trim().to_lowercase()
}
