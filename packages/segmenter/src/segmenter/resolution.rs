//! Segmenter for administrative resolutions.
//!
//! Resolutions justify first (repeated CONSIDERANDO recitals) and decide
//! second (a single RESUELVE operative block). The operative block may
//! itself enumerate articles; those are re-scanned with the article
//! patterns only and parented to the operative unit through
//! `parent_unit_id` rather than the statute numeric-context fields.

use crate::patterns::{match_article_header, match_resolution_header};
use crate::segmenter::{flush, whole_document_fallback, OpenUnit};
use crate::types::{Unit, UnitType};

/// Segment an administrative resolution.
#[must_use]
pub fn segment_resolution(document_id: &str, text: &str) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();
    let mut open: Option<OpenUnit> = None;
    let mut in_operative = false;
    let mut operative_id: Option<String> = None;

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(header) = match_resolution_header(trimmed) {
            // A second RESUELVE header is content, not a new operative block
            if header.unit_type == UnitType::Operative && in_operative {
                let target = open.get_or_insert_with(|| OpenUnit::new(UnitType::WholeDocument));
                target.push_line(line);
                continue;
            }

            flush(&mut units, open.take(), document_id);
            if header.unit_type == UnitType::Operative {
                in_operative = true;
            }
            let mut next = OpenUnit::new(header.unit_type);
            if let Some(rest) = header.rest {
                next.push_line(&rest);
            }
            open = Some(next);
            continue;
        }

        if in_operative {
            if let Some(header) = match_article_header(trimmed) {
                flush(&mut units, open.take(), document_id);
                if operative_id.is_none() {
                    operative_id = units
                        .iter()
                        .rev()
                        .find(|u| u.unit_type == UnitType::Operative)
                        .map(|u| u.id.clone());
                }
                let mut next = OpenUnit::new(UnitType::Article)
                    .with_number(header.number)
                    .with_heading(header.heading)
                    .with_parent_unit(operative_id.clone());
                if let Some(rest) = header.rest {
                    next.push_line(&rest);
                }
                open = Some(next);
                continue;
            }
        }

        let target = open.get_or_insert_with(|| OpenUnit::new(UnitType::WholeDocument));
        target.push_line(line);
    }

    flush(&mut units, open, document_id);

    if units.is_empty() {
        return whole_document_fallback(document_id, text);
    }
    units
}
