// src/interpretation/aptitude.rs

use serde::Serialize;

use crate::interpretation::percentage::percentage;
use crate::models::session::{MultipleIntelligences, TestSession};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntelligenceScore {
    pub key: &'static str,
    pub label: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AptitudeSummary {
    pub score_total: u32,
    pub max_score_total: u32,
    pub percentage: u8,
    /// Sub-scores as reported, in a fixed display order.
    pub intelligences: Vec<IntelligenceScore>,
}

fn intelligence_scores(mi: &MultipleIntelligences) -> Vec<IntelligenceScore> {
    [
        ("linguistic", "Linguistik", mi.linguistic),
        ("logicalMathematical", "Logis-Matematis", mi.logical_mathematical),
        ("spatial", "Spasial", mi.spatial),
        ("musical", "Musikal", mi.musical),
        ("bodilyKinesthetic", "Kinestetik", mi.bodily_kinesthetic),
        ("interpersonal", "Interpersonal", mi.interpersonal),
        ("intrapersonal", "Intrapersonal", mi.intrapersonal),
        ("naturalist", "Naturalis", mi.naturalist),
    ]
    .into_iter()
    .map(|(key, label, score)| IntelligenceScore { key, label, score })
    .collect()
}

/// Summarizes aptitude totals. Returns `None` when the session carries no
/// aptitude data at all; missing totals count as 0.
pub fn summarize(session: &TestSession) -> Option<AptitudeSummary> {
    if session.aptitude_score_total.is_none()
        && session.aptitude_max_score_total.is_none()
        && session.multiple_intelligences.is_none()
    {
        return None;
    }

    let score_total = session.aptitude_score_total.unwrap_or(0);
    let max_score_total = session.aptitude_max_score_total.unwrap_or(0);

    Some(AptitudeSummary {
        score_total,
        max_score_total,
        percentage: percentage(score_total, max_score_total),
        intelligences: session
            .multiple_intelligences
            .as_ref()
            .map(intelligence_scores)
            .unwrap_or_default(),
    })
}
