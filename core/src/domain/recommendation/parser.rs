use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::recommendation::{
    entities::{CandidateList, RecommendationResult},
    prompt::{REASON_MARKER, RECOMMENDATION_MARKER, TIP_MARKER},
};

pub const FALLBACK_REASON: &str =
    "could not determine the model's pick; showing a representative choice";
pub const FALLBACK_TIP: &str = "enjoy your meal";
pub const PARSER_ERROR_REASON: &str =
    "could not read the model's reply; showing a representative choice";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Recommendation,
    Reason,
    Tip,
}

/// Labels per marker, longest first so "TIPS" strips fully before "TIP".
const MARKER_LABELS: &[(Marker, &[&str])] = &[
    (Marker::Recommendation, &[RECOMMENDATION_MARKER]),
    (Marker::Reason, &[REASON_MARKER]),
    (Marker::Tip, &[TIP_MARKER, "TIP"]),
];

#[derive(Debug, Error, PartialEq, Eq)]
enum ReplyParseError {
    #[error("recommendation number {0} does not fit an index")]
    IndexOverflow(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ParsedReply {
    /// 1-based pick; `None` when no recommendation marker carried digits.
    number: Option<usize>,
    saw_recommendation: bool,
    reason: Option<String>,
    tip: Option<String>,
}

/// Locate the earliest marker on a line. Returns the marker and the byte offset
/// just past its label.
fn find_marker(line: &str) -> Option<(Marker, usize)> {
    let upper = line.to_ascii_uppercase();

    MARKER_LABELS
        .iter()
        .filter_map(|(marker, labels)| {
            labels
                .iter()
                .filter_map(|label| upper.find(label).map(|pos| (pos, label.len())))
                .min_by_key(|(pos, len)| (*pos, usize::MAX - len))
                .map(|(pos, len)| (*marker, pos, pos + len))
        })
        .min_by_key(|(_, pos, _)| *pos)
        .map(|(marker, _, end)| (marker, end))
}

fn strip_label_punctuation(rest: &str) -> &str {
    rest.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '：' | '-' | '*' | '='))
        .trim_end_matches(|c: char| c.is_whitespace() || c == '*')
}

fn append(section: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !section.is_empty() {
        section.push(' ');
    }
    section.push_str(text);
}

fn read_number(text: &str) -> Result<Option<usize>, ReplyParseError> {
    DIGITS
        .find(text)
        .map(|digits| {
            digits
                .as_str()
                .parse::<usize>()
                .map_err(|_| ReplyParseError::IndexOverflow(digits.as_str().to_string()))
        })
        .transpose()
}

fn scan_reply(reply: &str) -> Result<ParsedReply, ReplyParseError> {
    let mut parsed = ParsedReply::default();
    // Section that plain lines feed. A recommendation marker without digits
    // stays open until a plain line supplies them.
    let mut open: Option<Marker> = None;

    for line in reply.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some((marker, end)) = find_marker(line) else {
            match open {
                Some(Marker::Recommendation) => {
                    if let Some(number) = read_number(line)? {
                        parsed.number = Some(number);
                        open = None;
                    }
                }
                Some(Marker::Reason) => append(parsed.reason.get_or_insert_with(String::new), line),
                Some(Marker::Tip) => append(parsed.tip.get_or_insert_with(String::new), line),
                None => {}
            }
            continue;
        };

        let rest = &line[end..];

        match marker {
            Marker::Recommendation if parsed.number.is_none() => {
                parsed.saw_recommendation = true;
                parsed.number = read_number(rest)?;
                open = parsed.number.is_none().then_some(Marker::Recommendation);
            }
            Marker::Reason if parsed.reason.is_none() => {
                parsed.reason = Some(strip_label_punctuation(rest).to_string());
                open = Some(Marker::Reason);
            }
            Marker::Tip if parsed.tip.is_none() => {
                parsed.tip = Some(strip_label_punctuation(rest).to_string());
                open = Some(Marker::Tip);
            }
            // A repeated tip marker still ends reason text.
            Marker::Tip if open == Some(Marker::Reason) => open = None,
            // Repeated markers are skipped without closing the open section.
            _ => {}
        }
    }

    Ok(parsed)
}

fn non_empty_or(text: Option<String>, default: &str) -> String {
    text.filter(|t| !t.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn fallback(candidates: &CandidateList, reason: Option<String>, tip: Option<String>) -> RecommendationResult {
    RecommendationResult {
        restaurant: candidates.first().clone(),
        reason: non_empty_or(reason, FALLBACK_REASON),
        tip: non_empty_or(tip, FALLBACK_TIP),
        is_model_generated: false,
    }
}

/// Turn a model reply into a recommendation. Total: malformed or out-of-range
/// replies degrade to the first candidate with `is_model_generated = false`.
pub fn parse_recommendation(reply: &str, candidates: &CandidateList) -> RecommendationResult {
    let parsed = match scan_reply(reply) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable model reply, using fallback");
            return RecommendationResult {
                restaurant: candidates.first().clone(),
                reason: PARSER_ERROR_REASON.to_string(),
                tip: FALLBACK_TIP.to_string(),
                is_model_generated: false,
            };
        }
    };

    let selected = parsed
        .number
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| candidates.get(index));

    match selected {
        Some(restaurant) => RecommendationResult {
            restaurant: restaurant.clone(),
            reason: parsed.reason.unwrap_or_default(),
            tip: parsed.tip.unwrap_or_default(),
            is_model_generated: true,
        },
        None => {
            tracing::warn!(
                number = ?parsed.number,
                marker_found = parsed.saw_recommendation,
                candidates = candidates.len(),
                "model pick missing or out of range, using fallback"
            );
            fallback(candidates, parsed.reason, parsed.tip)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restaurant::helpers::test_support::record;

    fn abc() -> CandidateList {
        CandidateList::try_from(vec![
            record("A", "한식", Some(3.0)),
            record("B", "일식", Some(5.0)),
            record("C", "중식", Some(7.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_well_formed_reply() {
        let result = parse_recommendation(
            "RECOMMENDATION: 2\nREASON: close and cheap\nTIPS: go early",
            &abc(),
        );
        assert_eq!(result.restaurant.id, "B");
        assert_eq!(result.reason, "close and cheap");
        assert_eq!(result.tip, "go early");
        assert!(result.is_model_generated);
    }

    #[test]
    fn test_every_valid_index_selects_that_candidate() {
        let candidates = abc();
        for n in 1..=candidates.len() {
            let result = parse_recommendation(&format!("RECOMMENDATION: {n}"), &candidates);
            assert_eq!(result.restaurant, *candidates.get(n - 1).unwrap());
            assert!(result.is_model_generated);
        }
    }

    #[test]
    fn test_out_of_range_index_falls_back() {
        let result = parse_recommendation("RECOMMENDATION: 9\nREASON: x", &abc());
        assert_eq!(result.restaurant.id, "A");
        assert!(!result.is_model_generated);
        assert_eq!(result.reason, "x");
        assert_eq!(result.tip, FALLBACK_TIP);
    }

    #[test]
    fn test_zero_index_falls_back() {
        let result = parse_recommendation("RECOMMENDATION: 0", &abc());
        assert_eq!(result.restaurant.id, "A");
        assert!(!result.is_model_generated);
        assert_eq!(result.reason, FALLBACK_REASON);
    }

    #[test]
    fn test_missing_marker_falls_back() {
        let result = parse_recommendation("I'd go with number 2, honestly.", &abc());
        assert_eq!(result.restaurant.id, "A");
        assert!(!result.is_model_generated);
        assert_eq!(result.reason, FALLBACK_REASON);
        assert_eq!(result.tip, FALLBACK_TIP);
    }

    #[test]
    fn test_never_panics_on_degenerate_input() {
        for reply in ["", "   \n\t\n  ", "RECOMMENDATION:", "REASON:\nTIPS:", "RECOMMENDATION: two"] {
            let result = parse_recommendation(reply, &abc());
            assert_eq!(result.restaurant.id, "A");
            assert!(!result.is_model_generated);
            assert!(!result.reason.is_empty());
            assert!(!result.tip.is_empty());
        }
    }

    #[test]
    fn test_huge_number_uses_parser_error_reason() {
        let result = parse_recommendation("RECOMMENDATION: 99999999999999999999999999", &abc());
        assert_eq!(result.restaurant.id, "A");
        assert!(!result.is_model_generated);
        assert_eq!(result.reason, PARSER_ERROR_REASON);
    }

    #[test]
    fn test_markers_are_case_insensitive_and_unanchored() {
        let reply = "**Recommendation**: #3\nMy reason: spicy and fast\n> tip: order the set";
        let result = parse_recommendation(reply, &abc());
        assert_eq!(result.restaurant.id, "C");
        assert_eq!(result.reason, "spicy and fast");
        assert_eq!(result.tip, "order the set");
    }

    #[test]
    fn test_first_digits_after_marker_win() {
        let result = parse_recommendation("RECOMMENDATION: 3 (or maybe 1)", &abc());
        assert_eq!(result.restaurant.id, "C");
    }

    #[test]
    fn test_first_marker_line_of_each_kind_wins() {
        let reply = "RECOMMENDATION: 1\nRECOMMENDATION: 2\nREASON: first\nREASON: second\nTIPS: one\nTIPS: two";
        let result = parse_recommendation(reply, &abc());
        assert_eq!(result.restaurant.id, "A");
        assert!(result.is_model_generated);
        assert_eq!(result.reason, "first");
        assert_eq!(result.tip, "one");
    }

    #[test]
    fn test_continuation_lines_are_space_joined() {
        let reply = "REASON: close by\nand the broth is rich\n\nTIPS: go early\nbring cash\nRECOMMENDATION: 2";
        let result = parse_recommendation(reply, &abc());
        assert_eq!(result.restaurant.id, "B");
        assert_eq!(result.reason, "close by and the broth is rich");
        assert_eq!(result.tip, "go early bring cash");
    }

    #[test]
    fn test_repeated_marker_does_not_end_reason_text() {
        let reply = "RECOMMENDATION: 2\nREASON: close by\nprices are reasonable too\nand quick\nTIPS: go early";
        let result = parse_recommendation(reply, &abc());
        assert_eq!(result.restaurant.id, "B");
        assert_eq!(result.reason, "close by and quick");
        assert_eq!(result.tip, "go early");

        let reply = "REASON: close by\nREASON: again\nand quick\nTIPS: go early\nTIPS: later\nbring cash";
        let result = parse_recommendation(reply, &abc());
        assert_eq!(result.reason, "close by and quick");
        assert_eq!(result.tip, "go early bring cash");
    }

    #[test]
    fn test_repeated_tip_marker_still_ends_reason_text() {
        let reply = "TIPS: go early\nRECOMMENDATION: 1\nREASON: close by\nthe tip jar is full\nnot part of anything";
        let result = parse_recommendation(reply, &abc());
        assert_eq!(result.reason, "close by");
        assert_eq!(result.tip, "go early");
    }

    #[test]
    fn test_number_on_the_line_after_a_bare_marker() {
        let result = parse_recommendation("RECOMMENDATION:\n2\nREASON: x", &abc());
        assert_eq!(result.restaurant.id, "B");
        assert!(result.is_model_generated);
        assert_eq!(result.reason, "x");
    }

    #[test]
    fn test_later_marker_with_digits_counts() {
        let result = parse_recommendation("RECOMMENDATION: two\nRECOMMENDATION: 3\nRECOMMENDATION: 1", &abc());
        assert_eq!(result.restaurant.id, "C");
        assert!(result.is_model_generated);
    }

    #[test]
    fn test_earliest_marker_on_a_line_decides_its_kind() {
        let reply = "RECOMMENDATION: 1\nREASON: lots of tips from regulars\nTIPS: reasonable prices at lunch";
        let result = parse_recommendation(reply, &abc());
        assert_eq!(result.reason, "lots of tips from regulars");
        assert_eq!(result.tip, "reasonable prices at lunch");
    }
}
