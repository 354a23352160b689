// codec.rs — The line-oriented save format for the ledger and goal list.
//
// The format is deliberately small and lossy:
//
//   <total score>
//   SimpleGoal|<name>|<base points>
//   EternalGoal|<name>|<base points>
//   ChecklistGoal|<name>|<base points>
//
// Descriptions, completion flags, and checklist progress are not written;
// Goal::restored defines what comes back. Decoding is all-or-nothing: the
// first malformed line fails the whole document, so a partially loaded
// ledger can never reach the tracker.

use quest_goal::{Goal, Variant};

use crate::error::TrackerError;
use crate::ledger::ScoreLedger;

/// Field separator within a goal record. Goal names are rejected at
/// creation if they contain it.
pub(crate) const SEPARATOR: char = '|';

/// Encode the ledger and goals as a save document.
pub fn encode(ledger: &ScoreLedger, goals: &[Goal]) -> String {
    let mut out = format!("{}\n", ledger.total());
    for goal in goals {
        out.push_str(&format!(
            "{}|{}|{}\n",
            goal.variant().tag(),
            goal.name(),
            goal.base_points()
        ));
    }
    out
}

/// Decode a save document into a fresh ledger and goal list.
///
/// Never partially succeeds: any malformed line aborts the decode and the
/// caller keeps whatever state it already had.
pub fn decode(text: &str) -> Result<(ScoreLedger, Vec<Goal>), TrackerError> {
    let mut lines = text.lines().enumerate();

    let first = match lines.next() {
        Some((_, line)) => line,
        None => {
            return Err(TrackerError::CorruptRecord {
                line: 1,
                reason: "missing total score line".to_string(),
            })
        }
    };
    let total: i64 = first.trim().parse().map_err(|_| TrackerError::CorruptRecord {
        line: 1,
        reason: format!("unparsable total score {:?}", first),
    })?;

    let mut goals = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        if fields.len() != 3 {
            return Err(TrackerError::CorruptRecord {
                line: line_no,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        }

        let variant = Variant::from_tag(fields[0]).ok_or_else(|| TrackerError::CorruptRecord {
            line: line_no,
            reason: format!("unknown variant tag {:?}", fields[0]),
        })?;
        let points: i64 = fields[2]
            .trim()
            .parse()
            .map_err(|_| TrackerError::CorruptRecord {
                line: line_no,
                reason: format!("unparsable points field {:?}", fields[2]),
            })?;

        let goal =
            Goal::restored(variant, fields[1], points).map_err(|e| TrackerError::CorruptRecord {
                line: line_no,
                reason: e.to_string(),
            })?;
        goals.push(goal);
    }

    Ok((ScoreLedger::with_total(total), goals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goals() -> Vec<Goal> {
        vec![
            Goal::simple("Read scripture", "daily chapter", 5).unwrap(),
            Goal::eternal("Exercise", "", 10).unwrap(),
            Goal::checklist("Attend class", "", 5, 3, 100).unwrap(),
        ]
    }

    #[test]
    fn encode_writes_score_then_one_record_per_goal() {
        let ledger = ScoreLedger::with_total(135);
        let text = encode(&ledger, &sample_goals());
        assert_eq!(
            text,
            "135\nSimpleGoal|Read scripture|5\nEternalGoal|Exercise|10\nChecklistGoal|Attend class|5\n"
        );
    }

    #[test]
    fn encode_empty_session_is_just_the_score() {
        assert_eq!(encode(&ScoreLedger::new(), &[]), "0\n");
    }

    #[test]
    fn decode_round_trips_variant_name_and_points() {
        let ledger = ScoreLedger::with_total(2500);
        let goals = sample_goals();
        let text = encode(&ledger, &goals);

        let (decoded_ledger, decoded_goals) = decode(&text).unwrap();
        assert_eq!(decoded_ledger.total(), 2500);
        assert_eq!(decoded_goals.len(), 3);
        for (original, decoded) in goals.iter().zip(&decoded_goals) {
            assert_eq!(decoded.variant(), original.variant());
            assert_eq!(decoded.name(), original.name());
            assert_eq!(decoded.base_points(), original.base_points());
        }
    }

    #[test]
    fn decode_loses_description_and_checklist_progress() {
        let mut goals = sample_goals();
        goals[2].record_event();
        let text = encode(&ScoreLedger::new(), &goals);

        let (_, decoded) = decode(&text).unwrap();
        assert_eq!(decoded[0].description(), "");
        assert_eq!(decoded[2].progress(), "[ ] Completed 0/0 times");
    }

    #[test]
    fn decode_empty_document_is_corrupt() {
        let err = decode("").unwrap_err();
        assert!(matches!(err, TrackerError::CorruptRecord { line: 1, .. }));
    }

    #[test]
    fn decode_bad_score_line_is_corrupt() {
        let err = decode("lots of points\n").unwrap_err();
        assert!(matches!(err, TrackerError::CorruptRecord { line: 1, .. }));
    }

    #[test]
    fn decode_wrong_field_count_is_corrupt() {
        let err = decode("0\nSimpleGoal|only-two-fields\n").unwrap_err();
        assert!(matches!(err, TrackerError::CorruptRecord { line: 2, .. }));

        let err = decode("0\nSimpleGoal|a|b|c\n").unwrap_err();
        assert!(matches!(err, TrackerError::CorruptRecord { line: 2, .. }));
    }

    #[test]
    fn decode_unknown_tag_is_corrupt() {
        let err = decode("0\nMysteryGoal|name|5\n").unwrap_err();
        match err {
            TrackerError::CorruptRecord { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("MysteryGoal"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn decode_bad_points_field_is_corrupt() {
        let err = decode("0\nSimpleGoal|name|five\n").unwrap_err();
        assert!(matches!(err, TrackerError::CorruptRecord { line: 2, .. }));

        // Negative points parse as an integer but fail goal validation.
        let err = decode("0\nSimpleGoal|name|-5\n").unwrap_err();
        assert!(matches!(err, TrackerError::CorruptRecord { line: 2, .. }));
    }

    #[test]
    fn decode_stops_at_first_bad_line() {
        let err = decode("10\nSimpleGoal|ok|5\ngarbage\nEternalGoal|also ok|1\n").unwrap_err();
        assert!(matches!(err, TrackerError::CorruptRecord { line: 3, .. }));
    }
}
