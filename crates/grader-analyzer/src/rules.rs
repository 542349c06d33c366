//! Scoring rules, one per breakdown category.
//!
//! The standard set, in breakdown order:
//!
//! | Label         | Cap | Points                                   |
//! |---------------|-----|------------------------------------------|
//! | Structure     | 18  | 18 with any known section, else 6        |
//! | Bullets       | 12  | 2 per bullet                             |
//! | Action verbs  | 14  | 2 per distinct verb                      |
//! | Metrics       | 14  | 14 with any number/percent/amount, else 6 |
//! | Keywords      | 18  | 3 per matched keyword                    |
//! | Contact/Links | 12  | 6 or 2 for email, 6 or 2 for link        |
//! | Length        | 12  | 12 under 900 words, else 6               |

use grader_core::analysis::CategoryScore;

use crate::signals::Signals;

/// A single scoring category.
pub trait ScoringRule: Send + Sync {
    fn label(&self) -> &str;

    /// Upper bound on the sub-score.
    fn cap(&self) -> u32;

    /// Raw points and the note to show for them.
    fn evaluate(&self, signals: &Signals) -> (u32, &'static str);

    fn score(&self, signals: &Signals) -> CategoryScore {
        let (points, note) = self.evaluate(signals);
        let score = points.min(self.cap());
        log::debug!("{}: {} ({})", self.label(), score, note);
        CategoryScore::new(self.label(), score, note)
    }
}

/// Returns the standard rules in breakdown order.
pub fn standard_rules() -> Vec<Box<dyn ScoringRule>> {
    vec![
        Box::new(StructureRule),
        Box::new(BulletsRule),
        Box::new(ActionVerbsRule),
        Box::new(MetricsRule),
        Box::new(KeywordsRule),
        Box::new(ContactLinksRule),
        Box::new(LengthRule),
    ]
}

fn per_hit(count: usize, points: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(points)
}

pub struct StructureRule;

impl ScoringRule for StructureRule {
    fn label(&self) -> &str {
        "Structure"
    }
    fn cap(&self) -> u32 {
        18
    }
    fn evaluate(&self, signals: &Signals) -> (u32, &'static str) {
        if signals.sections.any() {
            (18, "Has standard sections")
        } else {
            (6, "Add Experience/Education/Skills")
        }
    }
}

pub struct BulletsRule;

impl ScoringRule for BulletsRule {
    fn label(&self) -> &str {
        "Bullets"
    }
    fn cap(&self) -> u32 {
        12
    }
    fn evaluate(&self, signals: &Signals) -> (u32, &'static str) {
        let note = if signals.bullets > 6 {
            "Good use of bullets"
        } else {
            "Use concise bullets"
        };
        (per_hit(signals.bullets, 2), note)
    }
}

pub struct ActionVerbsRule;

impl ScoringRule for ActionVerbsRule {
    fn label(&self) -> &str {
        "Action verbs"
    }
    fn cap(&self) -> u32 {
        14
    }
    fn evaluate(&self, signals: &Signals) -> (u32, &'static str) {
        let note = if signals.verb_hits > 5 {
            "Strong verbs present"
        } else {
            "Start bullets with strong verbs"
        };
        (per_hit(signals.verb_hits, 2), note)
    }
}

pub struct MetricsRule;

impl ScoringRule for MetricsRule {
    fn label(&self) -> &str {
        "Metrics"
    }
    fn cap(&self) -> u32 {
        14
    }
    fn evaluate(&self, signals: &Signals) -> (u32, &'static str) {
        if signals.has_metrics {
            (14, "Quantified impact")
        } else {
            (6, "Add numbers: %, $, counts")
        }
    }
}

pub struct KeywordsRule;

impl ScoringRule for KeywordsRule {
    fn label(&self) -> &str {
        "Keywords"
    }
    fn cap(&self) -> u32 {
        18
    }
    fn evaluate(&self, signals: &Signals) -> (u32, &'static str) {
        let note = if signals.keyword_hits > 3 {
            "Matches target role"
        } else {
            "Mirror job description keywords"
        };
        (per_hit(signals.keyword_hits, 3), note)
    }
}

pub struct ContactLinksRule;

impl ScoringRule for ContactLinksRule {
    fn label(&self) -> &str {
        "Contact/Links"
    }
    fn cap(&self) -> u32 {
        12
    }
    fn evaluate(&self, signals: &Signals) -> (u32, &'static str) {
        let has_email = !signals.emails.is_empty();
        let has_link = !signals.links.is_empty();
        let points = (if has_email { 6 } else { 2 }) + (if has_link { 6 } else { 2 });
        let note = if has_email && has_link {
            "Contact + links"
        } else {
            "Add email + LinkedIn/GitHub/Portfolio"
        };
        (points, note)
    }
}

pub struct LengthRule;

impl ScoringRule for LengthRule {
    fn label(&self) -> &str {
        "Length"
    }
    fn cap(&self) -> u32 {
        12
    }
    fn evaluate(&self, signals: &Signals) -> (u32, &'static str) {
        if signals.words < 900 {
            (12, "Likely ≤1 page")
        } else {
            (6, "Trim to 1 page for junior roles")
        }
    }
}
