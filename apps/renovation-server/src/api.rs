//! API handlers for the renovation server
//!
//! Provides REST endpoints for:
//! - Clause evaluation
//! - Precedent listing
//! - Form options and defaults

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ServerError;

use renovation_engine::{
    all_precedents, Assessment, AssessmentStatus, CurrentCondition, LeaseFacts, MoveInCondition,
    RenovationEngine,
};
use shared_types::types::parse_optional_date;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "renovation-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Evaluation request body, as posted by the form
///
/// Conditions and dates arrive as raw strings so that unknown values can be
/// rejected with a readable message instead of a generic decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvaluateRequest {
    /// `renoviert`, `unrenoviert` or `teilrenoviert` (default: `renoviert`)
    pub uebernahme_zustand: Option<String>,
    /// Move-in date, `YYYY-MM-DD` or empty
    pub einzugsdatum: Option<String>,
    pub renovierung_bei_einzug: bool,

    pub hat_fristenplan: bool,
    pub fristen_starr: bool,
    pub fristen_weich: bool,
    pub farbvorgabe: bool,
    pub quotenklausel: bool,
    pub endrenovierung: bool,

    /// `gut`, `normal` or `stark` (default: `normal`)
    pub wohnung_zustand_aktuell: Option<String>,
    /// Date of the last renovation, `YYYY-MM-DD` or empty
    pub letzte_renovierung: Option<String>,
}

impl EvaluateRequest {
    /// Validate the request into typed facts
    pub fn into_facts(self) -> Result<LeaseFacts, ServerError> {
        let defaults = LeaseFacts::default();

        let move_in_condition = match self.uebernahme_zustand.as_deref() {
            Some(raw) => raw.parse::<MoveInCondition>()?,
            None => defaults.move_in_condition,
        };
        let current_condition = match self.wohnung_zustand_aktuell.as_deref() {
            Some(raw) => raw.parse::<CurrentCondition>()?,
            None => defaults.current_condition,
        };
        let move_in_date = match self.einzugsdatum.as_deref() {
            Some(raw) => parse_optional_date(raw)?,
            None => None,
        };
        let last_renovation = match self.letzte_renovierung.as_deref() {
            Some(raw) => parse_optional_date(raw)?,
            None => None,
        };

        Ok(LeaseFacts {
            move_in_condition,
            move_in_date,
            renovated_at_move_in: self.renovierung_bei_einzug,
            has_interval_schedule: self.hat_fristenplan,
            rigid_intervals: self.fristen_starr,
            flexible_intervals: self.fristen_weich,
            color_prescription: self.farbvorgabe,
            pro_rata_clause: self.quotenklausel,
            final_renovation_clause: self.endrenovierung,
            current_condition,
            last_renovation,
        })
    }
}

/// Evaluation response
#[derive(Serialize)]
pub struct EvaluateResponse {
    pub success: bool,
    pub assessment: Assessment,
    pub status: StatusInfo,
}

/// Headline for the result card
#[derive(Serialize)]
pub struct StatusInfo {
    pub kind: AssessmentStatus,
    pub title: &'static str,
    pub subtitle: String,
}

impl StatusInfo {
    fn for_assessment(assessment: &Assessment) -> Self {
        let kind = assessment.status();
        Self {
            kind,
            title: kind.title(),
            subtitle: kind.subtitle(assessment.invalid_count),
        }
    }
}

/// Handler: POST /api/evaluate
pub async fn handle_evaluate(
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, ServerError> {
    let Json(req) = payload?;
    debug!("Evaluate request: {:?}", req);

    let facts = req.into_facts()?;

    let engine = RenovationEngine::new();
    let assessment = engine.evaluate(&facts);
    let status = StatusInfo::for_assessment(&assessment);

    info!(
        "Evaluation: move_in={}, current={}, invalid={}, status={:?}",
        facts.move_in_condition, facts.current_condition, assessment.invalid_count, status.kind
    );

    Ok(Json(EvaluateResponse {
        success: true,
        assessment,
        status,
    }))
}

/// Precedent list response
#[derive(Serialize)]
pub struct PrecedentListResponse {
    pub success: bool,
    pub precedents: Vec<PrecedentInfo>,
    pub count: usize,
}

/// A single BGH ruling
#[derive(Serialize)]
pub struct PrecedentInfo {
    pub key: String,
    pub urteil: String,
    pub text: String,
}

/// Handler: GET /api/precedents
pub async fn handle_list_precedents() -> Json<PrecedentListResponse> {
    let precedents: Vec<PrecedentInfo> = all_precedents()
        .into_iter()
        .map(|(key, precedent)| PrecedentInfo {
            key: key.as_str().to_string(),
            urteil: precedent.citation,
            text: precedent.summary,
        })
        .collect();

    let count = precedents.len();

    Json(PrecedentListResponse {
        success: true,
        precedents,
        count,
    })
}

/// Select options for the form
#[derive(Serialize)]
pub struct ConditionsResponse {
    pub success: bool,
    pub move_in: Vec<ConditionOption>,
    pub current: Vec<ConditionOption>,
}

#[derive(Serialize)]
pub struct ConditionOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Handler: GET /api/conditions
pub async fn handle_list_conditions() -> Json<ConditionsResponse> {
    let move_in = MoveInCondition::ALL
        .iter()
        .map(|c| ConditionOption {
            value: c.as_str(),
            label: c.label(),
        })
        .collect();
    let current = CurrentCondition::ALL
        .iter()
        .map(|c| ConditionOption {
            value: c.as_str(),
            label: c.label(),
        })
        .collect();

    Json(ConditionsResponse {
        success: true,
        move_in,
        current,
    })
}

/// Handler: GET /api/defaults
pub async fn handle_defaults() -> Json<LeaseFacts> {
    Json(LeaseFacts::default())
}
