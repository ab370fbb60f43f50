//! Outcome fields derived from the rule findings

use shared_types::{CurrentCondition, LeaseFacts, MoveInCondition};

use crate::rules::Findings;

pub const NOT_REQUIRED: &str =
    "Sie müssen wahrscheinlich NICHT renovieren. Die Klauseln sind unwirksam.";
pub const GOOD_CONDITION: &str = "Keine Renovierung nötig, da normaler Zustand.";
pub const MAY_BE_REQUIRED: &str = "Renovierung könnte erforderlich sein.";
pub const NO_VALID_CLAUSE: &str = "Keine wirksamen Renovierungsklauseln gefunden.";

/// The tenant has to renovate only when nothing was invalidated, some clause
/// holds, the apartment came renovated and it is no longer in good shape.
pub fn renovation_required(facts: &LeaseFacts, findings: &Findings) -> bool {
    findings.invalid.is_empty()
        && !findings.valid.is_empty()
        && facts.move_in_condition == MoveInCondition::Renovated
        && facts.current_condition != CurrentCondition::Good
}

/// Pick the recommendation text; earlier branches win.
pub fn recommend(facts: &LeaseFacts, findings: &Findings) -> &'static str {
    if !findings.invalid.is_empty() {
        NOT_REQUIRED
    } else if facts.current_condition == CurrentCondition::Good {
        GOOD_CONDITION
    } else if !findings.valid.is_empty() {
        MAY_BE_REQUIRED
    } else {
        NO_VALID_CLAUSE
    }
}

pub fn legal_situation_clear(facts: &LeaseFacts, findings: &Findings) -> bool {
    !findings.invalid.is_empty() || facts.current_condition == CurrentCondition::Good
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_all;

    fn derive(facts: &LeaseFacts) -> (bool, &'static str, bool) {
        let findings = check_all(facts);
        (
            renovation_required(facts, &findings),
            recommend(facts, &findings),
            legal_situation_clear(facts, &findings),
        )
    }

    #[test]
    fn test_invalid_clause_wins_over_good_condition() {
        let facts = LeaseFacts {
            pro_rata_clause: true,
            current_condition: CurrentCondition::Good,
            ..LeaseFacts::default()
        };
        assert_eq!(derive(&facts), (false, NOT_REQUIRED, true));
    }

    #[test]
    fn test_good_condition_wins_over_valid_clause() {
        let facts = LeaseFacts {
            flexible_intervals: true,
            current_condition: CurrentCondition::Good,
            ..LeaseFacts::default()
        };
        assert_eq!(derive(&facts), (false, GOOD_CONDITION, true));
    }

    #[test]
    fn test_valid_clause_on_worn_apartment() {
        let facts = LeaseFacts {
            flexible_intervals: true,
            current_condition: CurrentCondition::Normal,
            ..LeaseFacts::default()
        };
        assert_eq!(derive(&facts), (true, MAY_BE_REQUIRED, false));
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(
            derive(&LeaseFacts::default()),
            (false, NO_VALID_CLAUSE, false)
        );
    }

    #[test]
    fn test_valid_and_invalid_clause_together() {
        let facts = LeaseFacts {
            rigid_intervals: true,
            flexible_intervals: true,
            current_condition: CurrentCondition::HeavilyWorn,
            ..LeaseFacts::default()
        };
        assert_eq!(derive(&facts), (false, NOT_REQUIRED, true));
    }
}
