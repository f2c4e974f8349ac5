// src/interpretation/assembler.rs

use std::borrow::Cow;

use crate::interpretation::{
    answers, aptitude, category, narrative, riasec,
    percentage::percentage,
    thresholds::{DEFAULT_MINIMUM_SCORE, Thresholds, Verdict},
    zscore::{self, PopulationParams},
};
use crate::models::{
    answer::Answer,
    report::{BreakdownSource, InterpretationReport},
    session::TestSession,
};

/// Tunable engine parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub population: PopulationParams,
    /// Applied when a session has no `minimum_score`.
    pub default_minimum_score: u8,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            population: PopulationParams::default(),
            default_minimum_score: DEFAULT_MINIMUM_SCORE,
        }
    }
}

/// Turns a scored session snapshot into an [`InterpretationReport`].
///
/// Holds only settings; every call is independent and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAssembler {
    settings: EngineSettings,
}

impl ReportAssembler {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn assemble(&self, session: &TestSession, answers: &[Answer]) -> InterpretationReport {
        let population = &self.settings.population;

        let minimum_score = session
            .minimum_score
            .unwrap_or(self.settings.default_minimum_score)
            .min(100);
        let thresholds = Thresholds::derive(minimum_score);

        let overall_percentage = percentage(session.score, session.max_score);
        let overall_band = thresholds.band(overall_percentage);
        let verdict = Verdict::from_percentage(overall_percentage, minimum_score);

        let (breakdown, breakdown_source) = if session.category_breakdown.is_empty() {
            (
                Cow::Owned(answers::breakdown_from_answers(answers)),
                BreakdownSource::Answers,
            )
        } else {
            (
                Cow::Borrowed(&session.category_breakdown),
                BreakdownSource::Session,
            )
        };
        let categories = category::classify_breakdown(&breakdown, &thresholds, population);

        let narrative = narrative::compose(overall_percentage, &categories);

        tracing::debug!(
            session_id = session.id,
            overall = overall_percentage,
            categories = categories.len(),
            "Assembled interpretation report"
        );

        InterpretationReport {
            session_id: session.id,
            test_id: session.test_id,
            user_id: session.user_id,
            status: session.status,
            score: session.score,
            max_score: session.max_score,
            overall_percentage,
            minimum_score,
            thresholds,
            overall_band,
            overall_band_label: overall_band.label(),
            verdict,
            verdict_label: verdict.label(),
            z_score: zscore::analyze(overall_percentage, population),
            categories,
            breakdown_source,
            riasec: riasec::resolve(session.riasec.as_ref(), session.holland_code.as_deref()),
            aptitude: aptitude::summarize(session),
            narrative,
            answer_statistics: answers::statistics(answers),
            duration_seconds: session.duration_seconds(),
        }
    }
}

/// Assembles a report with default settings.
pub fn assemble(session: &TestSession, answers: &[Answer]) -> InterpretationReport {
    ReportAssembler::default().assemble(session, answers)
}
