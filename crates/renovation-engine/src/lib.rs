//! Enforceability check for cosmetic repair clauses (Schönheitsreparaturen)
//! in German residential leases.
//!
//! [`RenovationEngine::evaluate`] is pure: the same facts always produce the
//! same [`Assessment`], and nothing is shared between calls except the
//! read-only precedent table.

pub mod precedents;
pub mod recommendation;
pub mod rules;

pub use precedents::{all_precedents, precedent};
pub use shared_types::{
    Assessment, AssessmentStatus, CurrentCondition, InvalidClause, LeaseFacts, MoveInCondition,
    Precedent, PrecedentKey, ValidClause,
};

use tracing::debug;

/// RenovationEngine entry point
pub struct RenovationEngine;

impl RenovationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, facts: &LeaseFacts) -> Assessment {
        let findings = rules::check_all(facts);

        let renovation_required = recommendation::renovation_required(facts, &findings);
        let recommendation = recommendation::recommend(facts, &findings).to_string();
        let legal_situation_clear = recommendation::legal_situation_clear(facts, &findings);

        debug!(
            move_in = %facts.move_in_condition,
            current = %facts.current_condition,
            invalid = findings.invalid.len(),
            valid = findings.valid.len(),
            renovation_required,
            "Evaluated cosmetic repair clauses"
        );

        Assessment {
            move_in_condition: facts.move_in_condition,
            current_condition: facts.current_condition,
            invalid_count: findings.invalid.len(),
            invalid_clauses: findings.invalid,
            valid_clauses: findings.valid,
            notes: findings.notes,
            renovation_required,
            recommendation,
            legal_situation_clear,
        }
    }
}

impl Default for RenovationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate facts with a throwaway engine
pub fn evaluate(facts: &LeaseFacts) -> Assessment {
    RenovationEngine::new().evaluate(facts)
}
