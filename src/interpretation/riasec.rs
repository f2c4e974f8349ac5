// src/interpretation/riasec.rs

use serde::Serialize;

use crate::interpretation::percentage::{percentage, percentage_of_totals};
use crate::models::session::{RiasecScores, ScorePair};

/// Holland interest dimensions. Declaration order is the tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiasecDimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecDimension {
    pub const ALL: [Self; 6] = [
        Self::Realistic,
        Self::Investigative,
        Self::Artistic,
        Self::Social,
        Self::Enterprising,
        Self::Conventional,
    ];

    pub fn initial(&self) -> char {
        match self {
            Self::Realistic => 'R',
            Self::Investigative => 'I',
            Self::Artistic => 'A',
            Self::Social => 'S',
            Self::Enterprising => 'E',
            Self::Conventional => 'C',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Realistic => "Realistis",
            Self::Investigative => "Investigatif",
            Self::Artistic => "Artistik",
            Self::Social => "Sosial",
            Self::Enterprising => "Wirausaha",
            Self::Conventional => "Konvensional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Realistic => "Menyukai kegiatan praktis, bekerja dengan alat, mesin, atau alam.",
            Self::Investigative => "Menyukai kegiatan meneliti, menganalisis, dan memecahkan masalah ilmiah.",
            Self::Artistic => "Menyukai kegiatan kreatif, ekspresif, dan tidak terstruktur.",
            Self::Social => "Menyukai kegiatan membantu, mengajar, dan bekerja sama dengan orang lain.",
            Self::Enterprising => "Menyukai kegiatan memimpin, membujuk, dan mengelola usaha.",
            Self::Conventional => "Menyukai kegiatan teratur, administratif, dan bekerja dengan data.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HollandCodeSource {
    Explicit,
    Computed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension: RiasecDimension,
    pub initial: char,
    pub label: &'static str,
    pub description: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
    /// 1-based position after ordering by score, with ties on dimension order.
    pub rank: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiasecProfile {
    /// Always in R, I, A, S, E, C order.
    pub dimensions: Vec<DimensionScore>,
    /// Sums of the six dimensions; wider than a single score.
    pub total: u64,
    pub total_max: u64,
    pub percentage: u8,
    pub holland_code: String,
    pub holland_code_source: HollandCodeSource,
}

/// Ranks dimensions by score descending; equal scores keep R, I, A, S, E, C order.
fn ranking(scores: &[(RiasecDimension, ScorePair)]) -> Vec<RiasecDimension> {
    let mut ordered: Vec<&(RiasecDimension, ScorePair)> = scores.iter().collect();
    ordered.sort_by(|a, b| b.1.score.cmp(&a.1.score).then(a.0.cmp(&b.0)));
    ordered.into_iter().map(|(dimension, _)| *dimension).collect()
}

/// Top three initials by score.
pub fn compute_holland_code(scores: &RiasecScores) -> String {
    let pairs = pairs(scores);
    ranking(&pairs).iter().take(3).map(RiasecDimension::initial).collect()
}

fn pairs(scores: &RiasecScores) -> Vec<(RiasecDimension, ScorePair)> {
    RiasecDimension::ALL
        .iter()
        .zip(scores.as_array())
        .map(|(dimension, pair)| (*dimension, pair.unwrap_or_default()))
        .collect()
}

/// Builds the interest profile, or `None` when no dimension was reported.
/// A non-blank explicit code wins over the computed one.
pub fn resolve(scores: Option<&RiasecScores>, explicit_code: Option<&str>) -> Option<RiasecProfile> {
    let scores = scores.filter(|s| !s.is_empty())?;
    let pairs = pairs(scores);
    let order = ranking(&pairs);

    let dimensions: Vec<DimensionScore> = pairs
        .iter()
        .map(|(dimension, pair)| {
            let rank = order.iter().position(|d| d == dimension).unwrap_or(0) + 1;
            DimensionScore {
                dimension: *dimension,
                initial: dimension.initial(),
                label: dimension.label(),
                description: dimension.description(),
                score: pair.score,
                max_score: pair.max_score,
                percentage: percentage(pair.score, pair.max_score),
                rank: rank as u8,
            }
        })
        .collect();

    let total: u64 = pairs.iter().map(|(_, p)| u64::from(p.score)).sum();
    let total_max: u64 = pairs.iter().map(|(_, p)| u64::from(p.max_score)).sum();

    let (holland_code, holland_code_source) = match explicit_code.map(str::trim) {
        Some(code) if !code.is_empty() => (code.to_ascii_uppercase(), HollandCodeSource::Explicit),
        _ => (
            order.iter().take(3).map(RiasecDimension::initial).collect(),
            HollandCodeSource::Computed,
        ),
    };

    Some(RiasecProfile {
        dimensions,
        total,
        total_max,
        percentage: percentage_of_totals(total, total_max),
        holland_code,
        holland_code_source,
    })
}
