//! Font-size and line-spacing assessment from positioned PDF fragments.
//!
//! Body size is the median fragment size. Headings are any size more than
//! one point above the body. Line spacing is measured on the most common
//! size: the median vertical gap between its fragments on the same page,
//! ignoring zero gaps and gaps above three times the size, divided by the
//! size.

use std::collections::BTreeMap;

use grader_core::analysis::Typography;
use grader_core::document::Fragment;

use crate::stats::{median, round_tenth};

const SMALL_BODY_PT: u32 = 10;
const LARGE_BODY_PT: u32 = 12;
const CRAMPED_RATIO: f64 = 1.15;
const LOOSE_RATIO: f64 = 1.5;
const MAX_GAP_FACTOR: f64 = 3.0;

/// Assess the typography of a document. `None` (non-PDF input) and PDFs
/// without any sized fragment are reported as unavailable.
pub fn assess(fragments: Option<&[Fragment]>) -> Typography {
    let Some(fragments) = fragments else {
        return Typography::unavailable();
    };

    let sized: Vec<&Fragment> = fragments
        .iter()
        .filter(|f| f.font_size_pt.is_finite() && f.font_size_pt > 0.0)
        .collect();
    let sizes: Vec<f64> = sized.iter().map(|f| f.font_size_pt).collect();

    let Some(median_size) = median(&sizes) else {
        log::debug!("No sized fragments; typography unavailable");
        return Typography::unavailable();
    };
    let body_size = median_size.round() as u32;

    let heading_sizes = heading_sizes(&sizes, body_size);
    let line_spacing_ratio = line_spacing_ratio(&sized);
    let verdicts = verdicts(body_size, &heading_sizes, line_spacing_ratio);

    log::debug!(
        "Typography: body {}pt, headings {:?}, spacing {:?}",
        body_size,
        heading_sizes,
        line_spacing_ratio
    );

    Typography {
        available: true,
        body_size_pt: Some(body_size),
        heading_sizes_pt: heading_sizes,
        line_spacing_ratio,
        font_candidates: font_candidates(&sized),
        verdicts,
    }
}

/// Distinct sizes above `body + 1`, largest first. Sizes are rounded to
/// one decimal before the comparison.
fn heading_sizes(sizes: &[f64], body_size: u32) -> Vec<f64> {
    let threshold = f64::from(body_size) + 1.0;
    let mut headings: Vec<f64> = sizes
        .iter()
        .map(|&s| round_tenth(s))
        .filter(|&s| s > threshold)
        .collect();
    headings.sort_by(|a, b| b.total_cmp(a));
    headings.dedup();
    headings
}

/// Distinct font names, in order of first appearance.
fn font_candidates(fragments: &[&Fragment]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in fragments.iter().filter_map(|f| f.font_name.as_deref()) {
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Size key with one decimal of precision.
fn size_key(size: f64) -> i64 {
    (size * 10.0).round() as i64
}

fn line_spacing_ratio(fragments: &[&Fragment]) -> Option<f64> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for f in fragments {
        *counts.entry(size_key(f.font_size_pt)).or_default() += 1;
    }

    // Ascending iteration with a strict comparison keeps the smaller size on ties.
    let mut dominant: Option<(i64, usize)> = None;
    for (&key, &count) in &counts {
        if dominant.map_or(true, |(_, best)| count > best) {
            dominant = Some((key, count));
        }
    }
    let (key, _) = dominant?;
    let size = key as f64 / 10.0;

    let mut by_page: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for f in fragments.iter().filter(|f| size_key(f.font_size_pt) == key) {
        by_page.entry(f.page).or_default().push(f.vertical_position);
    }

    let mut gaps: Vec<f64> = Vec::new();
    for positions in by_page.values_mut() {
        positions.sort_by(f64::total_cmp);
        gaps.extend(
            positions
                .windows(2)
                .map(|w| (w[1] - w[0]).abs())
                .filter(|&gap| gap > 0.0 && gap <= MAX_GAP_FACTOR * size),
        );
    }

    let gap = median(&gaps)?;
    Some(round_tenth(gap / size))
}

fn verdicts(body_size: u32, heading_sizes: &[f64], line_spacing: Option<f64>) -> Vec<String> {
    let mut verdicts = Vec::new();
    if body_size < SMALL_BODY_PT {
        verdicts.push("small body text".to_string());
    }
    if body_size > LARGE_BODY_PT {
        verdicts.push("large body text".to_string());
    }
    if heading_sizes.is_empty() {
        verdicts.push("no clear section headings (by size)".to_string());
    }
    if let Some(ratio) = line_spacing {
        if ratio < CRAMPED_RATIO {
            verdicts.push("cramped text".to_string());
        }
        if ratio > LOOSE_RATIO {
            verdicts.push("loose spacing".to_string());
        }
    }
    verdicts
}
