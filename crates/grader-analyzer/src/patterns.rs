//! Detection patterns for contact details, bullets, metrics and keywords.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("valid email pattern")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9][0-9\s\-().]{7,}[0-9]").expect("valid phone pattern"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(https?://[^\s)]+)\b").expect("valid url pattern"));

/// A bullet glyph at the start of the text or after a newline, allowing leading whitespace.
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\n)\s*[\x{2022}\-]").expect("valid bullet pattern"));

static METRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+%|\$[0-9]+|[0-9]{3,}").expect("valid metric pattern"));

/// `City, ST` style location.
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]+(?:[ \-][A-Z][a-zA-Z]+)*,\s?[A-Z]{2}\b")
        .expect("valid location pattern")
});

/// Verbs credited in the "Action verbs" category.
pub const ACTION_VERBS: &[&str] = &[
    "built",
    "created",
    "led",
    "shipped",
    "designed",
    "implemented",
    "launched",
    "optimized",
    "migrated",
    "automated",
    "improved",
    "reduced",
    "increased",
    "mentored",
    "owned",
    "delivered",
];

static ACTION_VERB_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ACTION_VERBS
        .iter()
        .filter_map(|verb| word_pattern(verb))
        .collect()
});

/// Case-insensitive whole-word pattern for a literal term.
fn word_pattern(term: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).ok()
}

/// Collapse every whitespace run to one space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL_RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

pub fn find_phones(text: &str) -> Vec<String> {
    PHONE_RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

pub fn find_links(text: &str) -> Vec<String> {
    URL_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn find_location(text: &str) -> Option<String> {
    LOCATION_RE.find(text).map(|m| m.as_str().to_string())
}

/// Number of lines starting with a bullet glyph. Runs on the raw text.
pub fn count_bullets(text: &str) -> usize {
    BULLET_RE.find_iter(text).count()
}

pub fn has_metrics(text: &str) -> bool {
    METRIC_RE.is_match(text)
}

/// Number of distinct action verbs present as whole words.
pub fn count_action_verbs(text: &str) -> usize {
    ACTION_VERB_RES.iter().filter(|re| re.is_match(text)).count()
}

/// True when `term` occurs in `text` as a whole word, ignoring case.
pub fn contains_word(text: &str, term: &str) -> bool {
    match word_pattern(term) {
        Some(re) => re.is_match(text),
        None => {
            log::warn!("Cannot build a pattern for keyword {:?}", term);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a\n\tb   c \n"), "a b c");
        assert_eq!(normalize_whitespace(" \n "), "");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("Led a team\nof 5"), 5);
    }

    #[test]
    fn test_find_emails() {
        let emails = find_emails("Mail jane.doe+cv@mail.example.co.uk or JOHN@EXAMPLE.COM");
        assert_eq!(emails, vec!["jane.doe+cv@mail.example.co.uk", "JOHN@EXAMPLE.COM"]);
        assert!(find_emails("user@localhost").is_empty());
    }

    #[test]
    fn test_find_phones() {
        assert_eq!(find_phones("Call +1 (555) 123-4567 today"), vec!["+1 (555) 123-4567"]);
        assert_eq!(find_phones("555.123.4567"), vec!["555.123.4567"]);
        assert!(find_phones("Class of 2019").is_empty());
    }

    #[test]
    fn test_find_links_trims_trailing_punctuation() {
        let links = find_links("See https://github.com/jane. Also (http://jane.dev/portfolio) too");
        assert_eq!(links, vec!["https://github.com/jane", "http://jane.dev/portfolio"]);
    }

    #[test]
    fn test_find_location() {
        assert_eq!(
            find_location("Jane Doe · Austin, TX · jane@x.io").as_deref(),
            Some("Austin, TX")
        );
        assert_eq!(find_location("New York, NY 10001").as_deref(), Some("New York, NY"));
        assert_eq!(find_location("no location here"), None);
    }

    #[test]
    fn test_count_bullets() {
        assert_eq!(count_bullets("- one\n- two\n  • three\nplain - dash"), 3);
        assert_eq!(count_bullets("• first"), 1);
        assert_eq!(count_bullets("no bullets"), 0);
    }

    #[test]
    fn test_has_metrics() {
        assert!(has_metrics("Cut costs by 30%"));
        assert!(has_metrics("Saved $5k"));
        assert!(has_metrics("Served 1200 users"));
        assert!(!has_metrics("Led 12 engineers"));
    }

    #[test]
    fn test_count_action_verbs_distinct_whole_words() {
        assert_eq!(count_action_verbs("Built X. built Y. Led Z."), 2);
        assert_eq!(count_action_verbs("Rebuilt the misled builder"), 0);
    }

    #[test]
    fn test_contains_word() {
        assert!(contains_word("Worked with React and AWS", "react"));
        assert!(!contains_word("Used Reactive streams", "React"));
        assert!(contains_word("Set up CI/CD pipelines", "CI/CD"));
        assert!(!contains_word("Wrote C++ daily", "C++"));
    }
}
