use crate::signals::Signals;

/// Improvement suggestions, in fixed order. Each is independent.
pub fn suggest(signals: &Signals) -> Vec<String> {
    let checks: [(bool, &str); 7] = [
        (
            !signals.has_metrics,
            "Add metrics (%, $, counts, scope) to show impact.",
        ),
        (
            signals.verb_hits < 6,
            "Start bullets with strong action verbs (built, shipped, optimized…).",
        ),
        (
            signals.keyword_hits < 4 && signals.keywords_supplied > 0,
            "Mirror the job description keywords (skills, tools, role terms).",
        ),
        (
            signals.emails.is_empty(),
            "Include a professional email in the header.",
        ),
        (
            !signals.has_github_link(),
            "Add a GitHub repository or portfolio link.",
        ),
        (
            signals.words > 900,
            "Cut filler; keep to one page unless senior.",
        ),
        (
            signals.bullets < 6,
            "Use bullets for readability over paragraphs.",
        ),
    ];

    checks
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, text)| text.to_string())
        .collect()
}
