//! BGH rulings cited for unenforceable clauses
//!
//! The table is fixed reference data, built once on first use and never
//! mutated afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;
use shared_types::{Precedent, PrecedentKey};

lazy_static! {
    static ref PRECEDENTS: HashMap<PrecedentKey, Precedent> = {
        let mut table = HashMap::new();
        table.insert(
            PrecedentKey::RigidIntervals,
            Precedent {
                citation: "BGH VIII ZR 360/03 vom 23.06.2004".to_string(),
                summary: "Starre Fristenpläne sind unwirksam".to_string(),
            },
        );
        table.insert(
            PrecedentKey::UnrenovatedHandover,
            Precedent {
                citation: "BGH VIII ZR 185/14 vom 18.03.2015".to_string(),
                summary: "Bei unrenovierter Übernahme ist Schönheitsreparaturklausel unwirksam"
                    .to_string(),
            },
        );
        table.insert(
            PrecedentKey::ProRata,
            Precedent {
                citation: "BGH VIII ZR 52/06 vom 18.10.2006".to_string(),
                summary: "Quotenklauseln sind generell unwirksam".to_string(),
            },
        );
        table.insert(
            PrecedentKey::FinalRenovation,
            Precedent {
                citation: "BGH VIII ZR 316/06 vom 12.09.2007".to_string(),
                summary: "Endrenovierungsklauseln sind unwirksam".to_string(),
            },
        );
        table
    };
}

/// Look up the ruling for a rule. Every [`PrecedentKey`] has an entry.
pub fn precedent(key: PrecedentKey) -> Precedent {
    PRECEDENTS[&key].clone()
}

/// All rulings in [`PrecedentKey::ALL`] order
pub fn all_precedents() -> Vec<(PrecedentKey, Precedent)> {
    PrecedentKey::ALL
        .iter()
        .map(|key| (*key, precedent(*key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_ruling() {
        for key in PrecedentKey::ALL {
            let ruling = precedent(key);
            assert!(ruling.citation.starts_with("BGH VIII ZR"));
            assert!(!ruling.summary.is_empty());
        }
    }

    #[test]
    fn test_pro_rata_citation() {
        let ruling = precedent(PrecedentKey::ProRata);
        assert_eq!(ruling.citation, "BGH VIII ZR 52/06 vom 18.10.2006");
        assert_eq!(ruling.summary, "Quotenklauseln sind generell unwirksam");
    }

    #[test]
    fn test_all_precedents_is_stable() {
        let keys: Vec<_> = all_precedents().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, PrecedentKey::ALL.to_vec());
    }
}
