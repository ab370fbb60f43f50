use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Wire format for move-in and renovation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Condition of the apartment when the tenant took it over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveInCondition {
    #[default]
    #[serde(rename = "renoviert")]
    Renovated,
    #[serde(rename = "unrenoviert")]
    Unrenovated,
    #[serde(rename = "teilrenoviert")]
    PartiallyRenovated,
}

impl MoveInCondition {
    pub const ALL: [MoveInCondition; 3] = [
        MoveInCondition::Renovated,
        MoveInCondition::Unrenovated,
        MoveInCondition::PartiallyRenovated,
    ];

    /// Wire value, as sent by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveInCondition::Renovated => "renoviert",
            MoveInCondition::Unrenovated => "unrenoviert",
            MoveInCondition::PartiallyRenovated => "teilrenoviert",
        }
    }

    /// Label shown next to the option in the form
    pub fn label(&self) -> &'static str {
        match self {
            MoveInCondition::Renovated => "Renoviert übernommen",
            MoveInCondition::Unrenovated => "Unrenoviert übernommen",
            MoveInCondition::PartiallyRenovated => "Teilweise renoviert",
        }
    }
}

impl fmt::Display for MoveInCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveInCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "renoviert" => Ok(MoveInCondition::Renovated),
            "unrenoviert" => Ok(MoveInCondition::Unrenovated),
            "teilrenoviert" => Ok(MoveInCondition::PartiallyRenovated),
            _ => Err(ParseError::UnknownMoveInCondition(s.to_string())),
        }
    }
}

/// Condition of the apartment today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurrentCondition {
    #[serde(rename = "gut")]
    Good,
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "stark")]
    HeavilyWorn,
}

impl CurrentCondition {
    pub const ALL: [CurrentCondition; 3] = [
        CurrentCondition::Good,
        CurrentCondition::Normal,
        CurrentCondition::HeavilyWorn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentCondition::Good => "gut",
            CurrentCondition::Normal => "normal",
            CurrentCondition::HeavilyWorn => "stark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CurrentCondition::Good => "Guter Zustand (wenig Gebrauchsspuren)",
            CurrentCondition::Normal => "Normale Abnutzung (übliche Spuren)",
            CurrentCondition::HeavilyWorn => "Stark abgenutzt (deutliche Schäden)",
        }
    }
}

impl fmt::Display for CurrentCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrentCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gut" => Ok(CurrentCondition::Good),
            "normal" => Ok(CurrentCondition::Normal),
            "stark" => Ok(CurrentCondition::HeavilyWorn),
            _ => Err(ParseError::UnknownCurrentCondition(s.to_string())),
        }
    }
}

/// Facts collected about a tenancy, grouped the way the form asks for them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseFacts {
    // Handover
    #[serde(rename = "uebernahme_zustand")]
    pub move_in_condition: MoveInCondition,
    #[serde(rename = "einzugsdatum", with = "optional_date")]
    pub move_in_date: Option<NaiveDate>,
    #[serde(rename = "renovierung_bei_einzug")]
    pub renovated_at_move_in: bool,

    // Lease clauses
    #[serde(rename = "hat_fristenplan")]
    pub has_interval_schedule: bool,
    #[serde(rename = "fristen_starr")]
    pub rigid_intervals: bool,
    #[serde(rename = "fristen_weich")]
    pub flexible_intervals: bool,
    #[serde(rename = "farbvorgabe")]
    pub color_prescription: bool,
    #[serde(rename = "quotenklausel")]
    pub pro_rata_clause: bool,
    #[serde(rename = "endrenovierung")]
    pub final_renovation_clause: bool,

    // Current situation
    #[serde(rename = "wohnung_zustand_aktuell")]
    pub current_condition: CurrentCondition,
    #[serde(rename = "letzte_renovierung", with = "optional_date")]
    pub last_renovation: Option<NaiveDate>,
}

/// Parse a form date; blank input means the field was left empty
pub fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ParseError::InvalidDate(raw.to_string()))
}

/// Serde adapter: `None` travels as the empty string the form uses
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_optional_date, DATE_FORMAT};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_optional_date(&raw).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Key into the precedent table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecedentKey {
    #[serde(rename = "starre_fristen")]
    RigidIntervals,
    #[serde(rename = "unrenoviert")]
    UnrenovatedHandover,
    #[serde(rename = "quotenklausel")]
    ProRata,
    #[serde(rename = "endrenovierung")]
    FinalRenovation,
}

impl PrecedentKey {
    pub const ALL: [PrecedentKey; 4] = [
        PrecedentKey::RigidIntervals,
        PrecedentKey::UnrenovatedHandover,
        PrecedentKey::ProRata,
        PrecedentKey::FinalRenovation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrecedentKey::RigidIntervals => "starre_fristen",
            PrecedentKey::UnrenovatedHandover => "unrenoviert",
            PrecedentKey::ProRata => "quotenklausel",
            PrecedentKey::FinalRenovation => "endrenovierung",
        }
    }
}

/// A BGH ruling backing an invalid clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precedent {
    #[serde(rename = "urteil")]
    pub citation: String, // e.g., "BGH VIII ZR 52/06 vom 18.10.2006"
    #[serde(rename = "text")]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidClause {
    #[serde(rename = "klausel")]
    pub clause: String,
    #[serde(rename = "grund")]
    pub reason: String,
    #[serde(rename = "bgh")]
    pub precedent: Precedent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidClause {
    #[serde(rename = "klausel")]
    pub clause: String,
    #[serde(rename = "grund")]
    pub reason: String,
}

/// Result of checking a set of [`LeaseFacts`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(rename = "uebernahme_zustand")]
    pub move_in_condition: MoveInCondition,
    #[serde(rename = "wohnung_zustand_aktuell")]
    pub current_condition: CurrentCondition,
    #[serde(rename = "unwirksame_klauseln")]
    pub invalid_clauses: Vec<InvalidClause>,
    #[serde(rename = "wirksame_klauseln")]
    pub valid_clauses: Vec<ValidClause>,
    #[serde(rename = "hinweise")]
    pub notes: Vec<String>,
    #[serde(rename = "muss_renovieren")]
    pub renovation_required: bool,
    #[serde(rename = "empfehlung")]
    pub recommendation: String,
    #[serde(rename = "anzahl_unwirksam")]
    pub invalid_count: usize,
    #[serde(rename = "rechtslage_klar")]
    pub legal_situation_clear: bool,
}

impl Assessment {
    /// Headline classification of this assessment
    pub fn status(&self) -> AssessmentStatus {
        if self.invalid_count > 0 {
            AssessmentStatus::NoObligation
        } else if self.renovation_required {
            AssessmentStatus::RenovationPossible
        } else {
            AssessmentStatus::Unclear
        }
    }
}

/// Headline outcome, from the tenant's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    /// At least one clause is unenforceable
    NoObligation,
    /// Only enforceable clauses and a worn apartment
    RenovationPossible,
    Unclear,
}

impl AssessmentStatus {
    pub fn title(&self) -> &'static str {
        match self {
            AssessmentStatus::NoObligation => "Keine Renovierungspflicht!",
            AssessmentStatus::RenovationPossible => "Renovierung möglicherweise erforderlich",
            AssessmentStatus::Unclear => "Rechtslage unklar",
        }
    }

    pub fn subtitle(&self, invalid_count: usize) -> String {
        match self {
            AssessmentStatus::NoObligation => format!(
                "{} unwirksame Klausel{} gefunden",
                invalid_count,
                if invalid_count != 1 { "n" } else { "" }
            ),
            AssessmentStatus::RenovationPossible => "Wirksame Klauseln im Vertrag".to_string(),
            AssessmentStatus::Unclear => "Individuelle Prüfung empfohlen".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_facts_match_empty_form() {
        let facts = LeaseFacts::default();
        assert_eq!(facts.move_in_condition, MoveInCondition::Renovated);
        assert_eq!(facts.current_condition, CurrentCondition::Normal);
        assert_eq!(facts.move_in_date, None);
        assert!(!facts.rigid_intervals);
        assert!(!facts.final_renovation_clause);
    }

    #[test]
    fn test_facts_deserialize_from_form_payload() {
        let payload = json!({
            "uebernahme_zustand": "unrenoviert",
            "einzugsdatum": "2019-04-01",
            "renovierung_bei_einzug": false,
            "hat_fristenplan": true,
            "fristen_starr": true,
            "fristen_weich": false,
            "farbvorgabe": false,
            "quotenklausel": true,
            "endrenovierung": false,
            "wohnung_zustand_aktuell": "stark",
            "letzte_renovierung": ""
        });

        let facts: LeaseFacts = serde_json::from_value(payload).unwrap();

        assert_eq!(facts.move_in_condition, MoveInCondition::Unrenovated);
        assert_eq!(facts.move_in_date, NaiveDate::from_ymd_opt(2019, 4, 1));
        assert_eq!(facts.current_condition, CurrentCondition::HeavilyWorn);
        assert_eq!(facts.last_renovation, None);
        assert!(facts.has_interval_schedule);
        assert!(facts.rigid_intervals);
        assert!(facts.pro_rata_clause);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let facts: LeaseFacts = serde_json::from_value(json!({ "quotenklausel": true })).unwrap();
        assert_eq!(
            facts,
            LeaseFacts {
                pro_rata_clause: true,
                ..LeaseFacts::default()
            }
        );
    }

    #[test]
    fn test_unknown_condition_is_rejected_by_serde() {
        let result: Result<LeaseFacts, _> =
            serde_json::from_value(json!({ "uebernahme_zustand": "neu" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_date_serializes_as_empty_string() {
        let value = serde_json::to_value(LeaseFacts::default()).unwrap();
        assert_eq!(value["einzugsdatum"], "");
        assert_eq!(value["uebernahme_zustand"], "renoviert");
        assert_eq!(value["wohnung_zustand_aktuell"], "normal");
    }

    #[test]
    fn test_conditions_parse_case_insensitively() {
        assert_eq!(
            " Teilrenoviert ".parse::<MoveInCondition>(),
            Ok(MoveInCondition::PartiallyRenovated)
        );
        assert_eq!("STARK".parse::<CurrentCondition>(), Ok(CurrentCondition::HeavilyWorn));
        assert_eq!(
            "neu".parse::<MoveInCondition>(),
            Err(ParseError::UnknownMoveInCondition("neu".to_string()))
        );
        assert_eq!(
            "kaputt".parse::<CurrentCondition>(),
            Err(ParseError::UnknownCurrentCondition("kaputt".to_string()))
        );
    }

    #[test]
    fn test_wire_values_parse_back() {
        for condition in MoveInCondition::ALL {
            assert_eq!(condition.as_str().parse::<MoveInCondition>(), Ok(condition));
        }
        for condition in CurrentCondition::ALL {
            assert_eq!(condition.as_str().parse::<CurrentCondition>(), Ok(condition));
        }
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date(""), Ok(None));
        assert_eq!(parse_optional_date("   "), Ok(None));
        assert_eq!(
            parse_optional_date("2021-12-31"),
            Ok(NaiveDate::from_ymd_opt(2021, 12, 31))
        );
        assert_eq!(
            parse_optional_date("31.12.2021"),
            Err(ParseError::InvalidDate("31.12.2021".to_string()))
        );
        assert!(parse_optional_date("2021-02-30").is_err());
    }

    #[test]
    fn test_precedent_keys_serialize_to_table_names() {
        for key in PrecedentKey::ALL {
            assert_eq!(serde_json::to_value(key).unwrap(), key.as_str());
        }
    }

    #[test]
    fn test_status_subtitle_pluralizes() {
        assert_eq!(
            AssessmentStatus::NoObligation.subtitle(1),
            "1 unwirksame Klausel gefunden"
        );
        assert_eq!(
            AssessmentStatus::NoObligation.subtitle(3),
            "3 unwirksame Klauseln gefunden"
        );
        assert_eq!(
            AssessmentStatus::Unclear.subtitle(0),
            "Individuelle Prüfung empfohlen"
        );
    }
}
