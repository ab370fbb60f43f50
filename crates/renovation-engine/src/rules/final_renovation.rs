use shared_types::{InvalidClause, LeaseFacts, PrecedentKey};

use super::Findings;
use crate::precedents::precedent;

pub const CLAUSE: &str = "Endrenovierungsklausel";
pub const REASON: &str = "Renovierungspflicht \"bei Auszug\" ohne Bedarfsprüfung unwirksam";

/// Renovation at move-out regardless of need (BGH VIII ZR 316/06)
pub fn check_final_renovation_clause(facts: &LeaseFacts) -> Findings {
    let mut findings = Findings::default();

    if facts.final_renovation_clause {
        findings.invalid.push(InvalidClause {
            clause: CLAUSE.to_string(),
            reason: REASON.to_string(),
            precedent: precedent(PrecedentKey::FinalRenovation),
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::CurrentCondition;

    #[test]
    fn test_flags_final_renovation_clause() {
        let facts = LeaseFacts {
            final_renovation_clause: true,
            ..LeaseFacts::default()
        };
        let findings = check_final_renovation_clause(&facts);
        assert_eq!(findings.invalid.len(), 1);
        assert_eq!(findings.invalid[0].clause, CLAUSE);
        assert_eq!(
            findings.invalid[0].precedent.citation,
            "BGH VIII ZR 316/06 vom 12.09.2007"
        );
    }

    #[test]
    fn test_flagged_even_for_heavily_worn_apartment() {
        let facts = LeaseFacts {
            final_renovation_clause: true,
            current_condition: CurrentCondition::HeavilyWorn,
            ..LeaseFacts::default()
        };
        assert_eq!(check_final_renovation_clause(&facts).invalid.len(), 1);
    }
}
