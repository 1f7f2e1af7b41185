//! Segmenter for judicial rulings.
//!
//! Rulings follow a canonical rhetorical order (vistos, resultando,
//! considerando, fundamentos, por tanto). The scan is the same
//! accumulation pass as the statute segmenter but flat: no parent links,
//! every block at depth 1. A repeated header (typically CONSIDERANDO)
//! opens a fresh unit each time.

use crate::patterns::match_ruling_header;
use crate::segmenter::{flush, whole_document_fallback, OpenUnit};
use crate::types::{Unit, UnitType};

/// Segment a ruling into its canonical rhetorical blocks.
#[must_use]
pub fn segment_ruling(document_id: &str, text: &str) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();
    let mut open: Option<OpenUnit> = None;
    let mut saw_anchor = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(header) = match_ruling_header(trimmed) {
            saw_anchor = true;
            flush(&mut units, open.take(), document_id);
            let mut next = OpenUnit::new(header.unit_type);
            if let Some(rest) = header.rest {
                next.push_line(&rest);
            }
            open = Some(next);
        } else {
            let target = open.get_or_insert_with(|| OpenUnit::new(UnitType::WholeDocument));
            target.push_line(line);
        }
    }

    flush(&mut units, open, document_id);

    // The strategy selector gates on anchor tokens, so this should not
    // trigger; guard anyway rather than return an empty list
    if !saw_anchor || units.is_empty() {
        tracing::warn!(document_id, "No ruling anchors found, falling back to whole_document");
        return whole_document_fallback(document_id, text);
    }
    units
}
