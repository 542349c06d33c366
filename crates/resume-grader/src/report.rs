//! Plain-text rendering of an analysis result.

use std::fmt::Write;

use grader_core::analysis::{AnalysisResult, Detected, SectionPresence, Typography};

fn mark(present: bool) -> &'static str {
    if present {
        "✓"
    } else {
        "✗"
    }
}

/// Render the report. `detailed` adds the full detected signal list.
pub fn render_text(result: &AnalysisResult, detailed: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Score: {}/100", result.score);
    out.push('\n');
    for category in &result.breakdown {
        let _ = writeln!(out, "{}: {} — {}", category.label, category.score, category.note);
    }

    if !result.suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for suggestion in &result.suggestions {
            let _ = writeln!(out, "  - {}", suggestion);
        }
    }

    let detected = &result.detected;
    let _ = writeln!(
        out,
        "\nDetected: email {} · links {} · {} words · {} bullets",
        mark(!detected.emails.is_empty()),
        mark(!detected.links.is_empty()),
        detected.words,
        detected.bullets
    );
    if detailed {
        render_detected(&mut out, detected);
    }

    if result.typography.available {
        render_typography(&mut out, &result.typography);
    }

    out
}

fn render_detected(out: &mut String, detected: &Detected) {
    let list = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    let _ = writeln!(out, "  Emails: {}", list(&detected.emails));
    let _ = writeln!(out, "  Phones: {}", list(&detected.phones));
    let _ = writeln!(out, "  Links: {}", list(&detected.links));
    let _ = writeln!(out, "  LinkedIn: {}", detected.linkedin.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "  Location: {}", detected.location.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "  Sections: {}", section_names(&detected.sections));
}

fn section_names(sections: &SectionPresence) -> String {
    let names: Vec<&str> = [
        (sections.experience, "experience"),
        (sections.education, "education"),
        (sections.projects, "projects"),
        (sections.skills, "skills"),
        (sections.summary, "summary"),
        (sections.certifications, "certifications"),
    ]
    .into_iter()
    .filter(|(present, _)| *present)
    .map(|(_, name)| name)
    .collect();

    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

fn render_typography(out: &mut String, typography: &Typography) {
    out.push_str("\nTypography:\n");
    if let Some(body) = typography.body_size_pt {
        let _ = writeln!(out, "  Body size: {}pt", body);
    }
    if !typography.heading_sizes_pt.is_empty() {
        let sizes: Vec<String> = typography
            .heading_sizes_pt
            .iter()
            .map(|s| format!("{}pt", s))
            .collect();
        let _ = writeln!(out, "  Headings: {}", sizes.join(", "));
    }
    if let Some(ratio) = typography.line_spacing_ratio {
        let _ = writeln!(out, "  Line spacing: {}", ratio);
    }
    if !typography.font_candidates.is_empty() {
        let _ = writeln!(out, "  Fonts: {}", typography.font_candidates.join(", "));
    }
    for verdict in &typography.verdicts {
        let _ = writeln!(out, "  ! {}", verdict);
    }
}
