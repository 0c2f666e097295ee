use crate::types::ContentCategory;

pub const NEWS_KEYWORDS: &[&str] = &[
    "news",
    "announcement",
    "breaking",
    "funding",
    "launch",
    "acquisition",
    "merger",
    "earnings",
    "ipo",
];

pub const PERSONAL_KEYWORDS: &[&str] = &[
    "personal_growth",
    "advice",
    "observation",
    "insight",
    "opinion",
    "experience",
    "lesson",
    "framework",
];

/// Classify text (plus optional surrounding context) by keyword.
///
/// Matching is a case-insensitive substring test against
/// `content + " " + context`. News keywords are checked first, so text
/// matching both sets is `News`. Text matching neither is `Personal`,
/// which keeps it subject to duplicate suppression.
pub fn classify(content: &str, context: &str) -> ContentCategory {
    let haystack = format!("{content} {context}").to_lowercase();

    if NEWS_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
        return ContentCategory::News;
    }

    if PERSONAL_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
        return ContentCategory::Personal;
    }

    ContentCategory::Personal
}
