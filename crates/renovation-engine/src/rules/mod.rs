//! The clause rules
//!
//! Each rule looks at the facts on its own. All rules always run and their
//! findings are concatenated in a fixed order; a clause found valid is never
//! removed because another rule found something invalid.

pub mod final_renovation;
pub mod handover;
pub mod intervals;
pub mod pro_rata;

use shared_types::{InvalidClause, LeaseFacts, ValidClause};

/// What a rule (or all of them together) found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub invalid: Vec<InvalidClause>,
    pub valid: Vec<ValidClause>,
    pub notes: Vec<String>,
}

impl Findings {
    pub fn extend(&mut self, other: Findings) {
        self.invalid.extend(other.invalid);
        self.valid.extend(other.valid);
        self.notes.extend(other.notes);
    }

    pub fn is_empty(&self) -> bool {
        self.invalid.is_empty() && self.valid.is_empty() && self.notes.is_empty()
    }
}

/// Run every rule against the facts
pub fn check_all(facts: &LeaseFacts) -> Findings {
    let mut findings = Findings::default();

    findings.extend(handover::check_unrenovated_handover(facts));
    findings.extend(intervals::check_rigid_intervals(facts));
    findings.extend(intervals::check_flexible_intervals(facts));
    findings.extend(pro_rata::check_pro_rata_clause(facts));
    findings.extend(final_renovation::check_final_renovation_clause(facts));

    findings
}
