//! Splits the provider's free-text plan into the five numbered sections the
//! prompt asks for. The scan is intentionally naive: markers are plain
//! `"1."`..`"5."` substrings matched left to right, so a numeral-period
//! token inside prose (a price, "3.5%") can claim a boundary. Sections whose
//! boundaries cannot both be located degrade to a sentinel instead of
//! failing the plan.

use serde::{Deserialize, Serialize};

/// Sentinel stored for any section that could not be located.
pub const NOT_PROVIDED: &str = "Not provided.";

/// Ordinal markers introducing the five plan sections.
const SECTION_MARKERS: [&str; 5] = ["1.", "2.", "3.", "4.", "5."];

/// The five sections of a generated plan, in prompt order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSections {
    pub savings_plan: String,
    pub investment_ideas: String,
    pub budget_breakdown: String,
    pub reasoning: String,
    pub alternatives: String,
}

/// Splits response text into plan sections. Section `i` spans from the end
/// of marker `i` to the start of marker `i + 1`; the last section runs to
/// the end of the text. A section resolves only when every boundary it
/// needs was found, otherwise it holds [`NOT_PROVIDED`].
pub fn split_sections(text: &str) -> PlanSections {
    let positions = locate_markers(text);
    PlanSections {
        savings_plan: section_at(text, &positions, 0),
        investment_ideas: section_at(text, &positions, 1),
        budget_breakdown: section_at(text, &positions, 2),
        reasoning: section_at(text, &positions, 3),
        alternatives: section_at(text, &positions, 4),
    }
}

/// Finds each marker's first occurrence at or after the scan cursor. The
/// cursor advances past every marker found; a missing marker leaves it
/// unchanged, so later markers are still searched from the same spot.
fn locate_markers(text: &str) -> [Option<usize>; 5] {
    let mut positions = [None; 5];
    let mut cursor = 0;

    for (i, marker) in SECTION_MARKERS.iter().enumerate() {
        if let Some(offset) = text[cursor..].find(marker) {
            let at = cursor + offset;
            positions[i] = Some(at);
            cursor = at + marker.len();
        }
    }

    positions
}

fn section_at(text: &str, positions: &[Option<usize>; 5], i: usize) -> String {
    let start = match positions[i] {
        Some(at) => at + SECTION_MARKERS[i].len(),
        None => return NOT_PROVIDED.to_string(),
    };
    let end = if i == SECTION_MARKERS.len() - 1 {
        text.len()
    } else {
        match positions[i + 1] {
            Some(at) => at,
            None => return NOT_PROVIDED.to_string(),
        }
    };
    text[start..end].trim().to_string()
}
