//! Text signals shared by the scoring rules and the suggestion list.

use grader_core::analysis::{Detected, SectionPresence};

use crate::patterns;

/// Everything the analyzer measures about a résumé's text, computed once.
#[derive(Debug, Clone, Default)]
pub struct Signals {
    pub words: usize,
    pub bullets: usize,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub links: Vec<String>,
    pub location: Option<String>,
    pub sections: SectionPresence,
    pub has_metrics: bool,
    pub verb_hits: usize,
    pub keyword_hits: usize,
    pub keywords_supplied: usize,
}

impl Signals {
    pub fn collect(text: &str, keywords: &[String]) -> Self {
        let normalized = patterns::normalize_whitespace(text);

        let keywords: Vec<&str> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect();
        let keyword_hits = keywords
            .iter()
            .filter(|k| patterns::contains_word(&normalized, k))
            .count();

        let signals = Self {
            words: patterns::word_count(&normalized),
            bullets: patterns::count_bullets(text),
            emails: patterns::find_emails(&normalized),
            phones: patterns::find_phones(&normalized),
            links: patterns::find_links(&normalized),
            location: patterns::find_location(text),
            sections: detect_sections(&normalized),
            has_metrics: patterns::has_metrics(&normalized),
            verb_hits: patterns::count_action_verbs(&normalized),
            keyword_hits,
            keywords_supplied: keywords.len(),
        };
        log::debug!(
            "Signals: {} words, {} bullets, {} verbs, {}/{} keywords",
            signals.words,
            signals.bullets,
            signals.verb_hits,
            signals.keyword_hits,
            signals.keywords_supplied
        );
        signals
    }

    pub fn linkedin(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.to_lowercase().contains("linkedin.com"))
            .map(String::as_str)
    }

    pub fn has_github_link(&self) -> bool {
        self.links
            .iter()
            .any(|l| l.to_lowercase().contains("github.com"))
    }

    pub fn detected(&self) -> Detected {
        Detected {
            emails: self.emails.clone(),
            phones: self.phones.clone(),
            links: self.links.clone(),
            linkedin: self.linkedin().map(str::to_string),
            location: self.location.clone(),
            bullets: self.bullets,
            words: self.words,
            sections: self.sections,
        }
    }
}

fn detect_sections(normalized: &str) -> SectionPresence {
    let lower = normalized.to_lowercase();
    let any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));
    SectionPresence {
        experience: any(&["experience", "work"]),
        education: any(&["education", "academic"]),
        projects: any(&["project"]),
        skills: any(&["skill", "technolog"]),
        summary: any(&["summary", "profile", "objective"]),
        certifications: any(&["certification", "qualification"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collect_basic_signals() {
        let text = "Jane Doe\nAustin, TX\njane@example.com\n\nEXPERIENCE\n- Built a cache serving 2000 rps\n- Led 4 engineers";
        let signals = Signals::collect(text, &keywords(&["cache", "Kafka"]));

        assert_eq!(signals.bullets, 2);
        assert_eq!(signals.emails, vec!["jane@example.com"]);
        assert_eq!(signals.location.as_deref(), Some("Austin, TX"));
        assert!(signals.sections.experience);
        assert!(!signals.sections.education);
        assert!(signals.has_metrics);
        assert_eq!(signals.verb_hits, 2);
        assert_eq!(signals.keyword_hits, 1);
        assert_eq!(signals.keywords_supplied, 2);
    }

    #[test]
    fn test_blank_and_padded_keywords() {
        let signals = Signals::collect("React dev", &keywords(&["", "  ", " React "]));
        assert_eq!(signals.keyword_hits, 1);
        assert_eq!(signals.keywords_supplied, 1);

        let signals = Signals::collect("hello world", &keywords(&[""]));
        assert_eq!(signals.keyword_hits, 0);
        assert_eq!(signals.keywords_supplied, 0);
    }

    #[test]
    fn test_section_synonyms() {
        let sections = detect_sections("Academic Projects Technologies Profile Qualifications Work");
        assert!(sections.experience);
        assert!(sections.education);
        assert!(sections.projects);
        assert!(sections.skills);
        assert!(sections.summary);
        assert!(sections.certifications);
    }

    #[test]
    fn test_work_matches_as_substring() {
        assert!(detect_sections("network engineer").experience);
    }

    #[test]
    fn test_linkedin_and_github() {
        let signals = Signals::collect(
            "https://www.LinkedIn.com/in/jane https://github.com/jane",
            &[],
        );
        assert_eq!(signals.linkedin(), Some("https://www.LinkedIn.com/in/jane"));
        assert!(signals.has_github_link());

        let detected = signals.detected();
        assert_eq!(detected.links.len(), 2);
        assert_eq!(detected.linkedin.as_deref(), Some("https://www.LinkedIn.com/in/jane"));
    }

    #[test]
    fn test_words_counted_on_whitespace_runs() {
        let signals = Signals::collect("  one\t two\n\nthree  ", &[]);
        assert_eq!(signals.words, 3);
    }
}
