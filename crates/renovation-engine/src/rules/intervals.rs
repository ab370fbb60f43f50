//! Repair interval schedules (Fristenplan)
//!
//! "Spätestens nach X Jahren" style deadlines are rigid and unenforceable.
//! Qualified wording ("in der Regel", "im Allgemeinen") is allowed, but only
//! holds up when the apartment was handed over renovated.

use shared_types::{InvalidClause, LeaseFacts, MoveInCondition, PrecedentKey, ValidClause};

use super::Findings;
use crate::precedents::precedent;

pub const RIGID_CLAUSE: &str = "Starre Fristenklausel";
pub const RIGID_REASON: &str = "\"Spätestens nach X Jahren\" ist zu starr";

pub const FLEXIBLE_CLAUSE: &str = "Weicher Fristenplan";
pub const FLEXIBLE_REASON: &str = "\"In der Regel\" oder \"im Allgemeinen\" ist zulässig";

/// Rigid deadlines (BGH VIII ZR 360/03)
pub fn check_rigid_intervals(facts: &LeaseFacts) -> Findings {
    let mut findings = Findings::default();

    if facts.rigid_intervals {
        findings.invalid.push(InvalidClause {
            clause: RIGID_CLAUSE.to_string(),
            reason: RIGID_REASON.to_string(),
            precedent: precedent(PrecedentKey::RigidIntervals),
        });
    }

    findings
}

/// Flexible schedule on a renovated handover
///
/// Independent of the other rules: a flexible schedule stays
/// valid even when the same lease also carries rigid deadlines.
pub fn check_flexible_intervals(facts: &LeaseFacts) -> Findings {
    let mut findings = Findings::default();

    if facts.flexible_intervals && facts.move_in_condition == MoveInCondition::Renovated {
        findings.valid.push(ValidClause {
            clause: FLEXIBLE_CLAUSE.to_string(),
            reason: FLEXIBLE_REASON.to_string(),
        });
    }

    findings
}
