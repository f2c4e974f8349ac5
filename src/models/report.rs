// src/models/report.rs

use serde::Serialize;

use crate::interpretation::{
    answers::AnswerStatistics,
    aptitude::AptitudeSummary,
    category::CategoryClassification,
    narrative::Narrative,
    riasec::RiasecProfile,
    thresholds::{ThresholdBand, Thresholds, Verdict},
    zscore::ZScoreSummary,
};
use crate::models::session::SessionStatus;

/// Where the category figures came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakdownSource {
    Session,
    Answers,
}

/// Fully interpreted result of one test session.
///
/// Built fresh from a session snapshot on every request. Renderers read it
/// as-is and never recompute any figure in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretationReport {
    pub session_id: i64,
    pub test_id: i64,
    pub user_id: i64,
    pub status: SessionStatus,

    pub score: u32,
    pub max_score: u32,
    pub overall_percentage: u8,

    /// Pass threshold actually applied (session value or default).
    pub minimum_score: u8,
    pub thresholds: Thresholds,
    pub overall_band: ThresholdBand,
    pub overall_band_label: &'static str,
    pub verdict: Verdict,
    pub verdict_label: &'static str,

    pub z_score: ZScoreSummary,

    pub categories: Vec<CategoryClassification>,
    pub breakdown_source: BreakdownSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub riasec: Option<RiasecProfile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aptitude: Option<AptitudeSummary>,

    pub narrative: Narrative,
    pub answer_statistics: AnswerStatistics,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
}
