use shared_types::{InvalidClause, LeaseFacts, PrecedentKey};

use super::Findings;
use crate::precedents::precedent;

pub const CLAUSE: &str = "Quotenklausel";
pub const REASON: &str = "Anteilige Kostenbeteiligung bei Auszug ist immer unwirksam";

/// Pro-rata cost sharing at move-out (BGH VIII ZR 52/06), never enforceable
pub fn check_pro_rata_clause(facts: &LeaseFacts) -> Findings {
    let mut findings = Findings::default();

    if facts.pro_rata_clause {
        findings.invalid.push(InvalidClause {
            clause: CLAUSE.to_string(),
            reason: REASON.to_string(),
            precedent: precedent(PrecedentKey::ProRata),
        });
    }

    findings
}
