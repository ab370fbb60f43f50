use shared_types::{InvalidClause, LeaseFacts, MoveInCondition, PrecedentKey};

use super::Findings;
use crate::precedents::precedent;

pub const CLAUSE: &str = "Gesamte Schönheitsreparaturklausel";
pub const REASON: &str = "Wohnung unrenoviert übernommen ohne Ausgleich";
pub const NOTE: &str = "Bei unrenovierter Übernahme müssen Sie gar nicht renovieren!";

/// Apartment handed over unrenovated (BGH VIII ZR 185/14)
///
/// If the tenant took over an unrenovated apartment and did not renovate it
/// at move-in, the whole cosmetic repair clause falls away. Renovating at
/// move-in counts as the tenant having received a renovated apartment.
/// Partially renovated handovers are not covered by this rule.
pub fn check_unrenovated_handover(facts: &LeaseFacts) -> Findings {
    let mut findings = Findings::default();

    if facts.move_in_condition == MoveInCondition::Unrenovated && !facts.renovated_at_move_in {
        findings.invalid.push(InvalidClause {
            clause: CLAUSE.to_string(),
            reason: REASON.to_string(),
            precedent: precedent(PrecedentKey::UnrenovatedHandover),
        });
        findings.notes.push(NOTE.to_string());
    }

    findings
}
