// src/interpretation/category.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::interpretation::{
    catalog::{self, CategoryContent, ContentTable},
    percentage::percentage,
    thresholds::{ThresholdBand, Thresholds},
    zscore::PopulationParams,
};
use crate::models::session::CategoryScore;

/// The four TPA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TpaCategory {
    Verbal,
    Numeric,
    Logical,
    Spatial,
}

impl TpaCategory {
    /// Canonical report order.
    pub const ALL: [Self; 4] = [Self::Verbal, Self::Numeric, Self::Logical, Self::Spatial];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "TES_VERBAL" => Some(Self::Verbal),
            "TES_ANGKA" => Some(Self::Numeric),
            "TES_LOGIKA" => Some(Self::Logical),
            "TES_GAMBAR" => Some(Self::Spatial),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Verbal => "TES_VERBAL",
            Self::Numeric => "TES_ANGKA",
            Self::Logical => "TES_LOGIKA",
            Self::Spatial => "TES_GAMBAR",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Verbal => "Tes Verbal",
            Self::Numeric => "Tes Angka",
            Self::Logical => "Tes Logika",
            Self::Spatial => "Tes Gambar",
        }
    }

    fn content_table(&self) -> &'static ContentTable {
        match self {
            Self::Verbal => &catalog::VERBAL_CONTENT,
            Self::Numeric => &catalog::NUMERIC_CONTENT,
            Self::Logical => &catalog::LOGICAL_CONTENT,
            Self::Spatial => &catalog::SPATIAL_CONTENT,
        }
    }
}

/// Sort key placing known categories in canonical order and unknown codes
/// after them, alphabetically.
pub fn category_order(code: &str) -> (usize, String) {
    match TpaCategory::from_code(code) {
        Some(category) => (category as usize, String::new()),
        None => (TpaCategory::ALL.len(), code.to_string()),
    }
}

/// Seven-level scale on fixed national cut-points, independent of the
/// session's own thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StandardLevel {
    Superior,
    VeryHigh,
    High,
    MediumHigh,
    Medium,
    MediumLow,
    Low,
}

const STANDARD_LEVELS: [(u8, StandardLevel); 6] = [
    (95, StandardLevel::Superior),
    (85, StandardLevel::VeryHigh),
    (75, StandardLevel::High),
    (60, StandardLevel::MediumHigh),
    (40, StandardLevel::Medium),
    (25, StandardLevel::MediumLow),
];

impl StandardLevel {
    pub fn from_percentage(percentage: u8) -> Self {
        STANDARD_LEVELS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(Self::Low)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Superior => "Superior",
            Self::VeryHigh => "Sangat Tinggi",
            Self::High => "Tinggi",
            Self::MediumHigh => "Sedang-Tinggi",
            Self::Medium => "Sedang",
            Self::MediumLow => "Sedang-Rendah",
            Self::Low => "Rendah",
        }
    }

    pub fn percentile_range(&self) -> &'static str {
        match self {
            Self::Superior => "Persentil 95-99",
            Self::VeryHigh => "Persentil 85-94",
            Self::High => "Persentil 75-84",
            Self::MediumHigh => "Persentil 60-74",
            Self::Medium => "Persentil 40-59",
            Self::MediumLow => "Persentil 25-39",
            Self::Low => "Persentil 1-24",
        }
    }
}

/// Position relative to the assumed national average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NationalComparison {
    FarAbove,
    Above,
    Around,
    Below,
    FarBelow,
}

impl NationalComparison {
    pub fn from_difference(diff: f64) -> Self {
        if diff >= 20.0 {
            Self::FarAbove
        } else if diff >= 10.0 {
            Self::Above
        } else if diff >= -5.0 {
            Self::Around
        } else if diff >= -15.0 {
            Self::Below
        } else {
            Self::FarBelow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FarAbove => "Jauh di atas rata-rata",
            Self::Above => "Di atas rata-rata",
            Self::Around => "Sekitar rata-rata",
            Self::Below => "Di bawah rata-rata",
            Self::FarBelow => "Jauh di bawah rata-rata",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelSummary {
    pub level: StandardLevel,
    pub label: &'static str,
    pub percentile_range: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub comparison: NationalComparison,
    pub label: &'static str,
    /// Percentage points above (positive) or below the national average.
    pub difference: f64,
}

/// Everything the renderers show for one in-scope category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryClassification {
    pub code: String,
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub band: ThresholdBand,
    pub standard_level: LevelSummary,
    pub comparison: ComparisonSummary,
    pub academic_potential: &'static str,
    pub strengths: &'static str,
    pub weaknesses: &'static str,
    pub recommendations: &'static [&'static str],
    pub difficulty: &'static str,
    pub time_management: &'static str,
}

/// Cut-points are `excellent`, `good + 15`, `average` and `poor + 20`;
/// anything below the last one shares its text. The second tier only shows
/// when `good + 15` falls below `excellent`, which the default thresholds
/// never produce.
fn academic_potential(percentage: u8, thresholds: &Thresholds) -> &'static str {
    let cut_points = [
        thresholds.excellent,
        thresholds.good.saturating_add(15),
        thresholds.average,
        thresholds.poor.saturating_add(20),
    ];
    let tier = cut_points
        .iter()
        .position(|min| percentage >= *min)
        .unwrap_or(cut_points.len() - 1);
    catalog::ACADEMIC_POTENTIAL[tier]
}

fn content_row(table: &'static ContentTable, percentage: u8, thresholds: &Thresholds) -> &'static CategoryContent {
    if percentage >= thresholds.good {
        &table[0]
    } else if percentage >= thresholds.average {
        &table[1]
    } else {
        &table[2]
    }
}

/// Classifies one category. Unknown codes keep their raw code as name and
/// borrow the verbal content table.
pub fn classify(
    code: &str,
    score: &CategoryScore,
    thresholds: &Thresholds,
    population: &PopulationParams,
) -> CategoryClassification {
    let category = TpaCategory::from_code(code);
    if category.is_none() {
        tracing::warn!("Unknown category code {:?}, using verbal content", code);
    }

    let pct = percentage(score.score, score.max_score);
    let level = StandardLevel::from_percentage(pct);
    let difference = f64::from(pct) - population.mean;
    let comparison = NationalComparison::from_difference(difference);
    let content = content_row(
        category.unwrap_or(TpaCategory::Verbal).content_table(),
        pct,
        thresholds,
    );

    CategoryClassification {
        code: code.to_string(),
        name: category
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| code.to_string()),
        score: score.score,
        max_score: score.max_score,
        percentage: pct,
        band: thresholds.band(pct),
        standard_level: LevelSummary {
            level,
            label: level.label(),
            percentile_range: level.percentile_range(),
        },
        comparison: ComparisonSummary {
            comparison,
            label: comparison.label(),
            difference,
        },
        academic_potential: academic_potential(pct, thresholds),
        strengths: content.strengths,
        weaknesses: content.weaknesses,
        recommendations: content.recommendations,
        difficulty: content.difficulty,
        time_management: content.time_management,
    }
}

/// Folds codes that differ only in case or surrounding whitespace into one
/// entry, summing their scores.
fn normalized(breakdown: &BTreeMap<String, CategoryScore>) -> BTreeMap<String, CategoryScore> {
    let mut merged: BTreeMap<String, CategoryScore> = BTreeMap::new();
    for (code, score) in breakdown {
        let code = code.trim().to_ascii_uppercase();
        if code.is_empty() {
            continue;
        }
        let entry = merged.entry(code).or_default();
        entry.score = entry.score.saturating_add(score.score);
        entry.max_score = entry.max_score.saturating_add(score.max_score);
    }
    merged
}

/// Classifies every in-scope category (`max_score > 0`) in canonical order.
pub fn classify_breakdown(
    breakdown: &BTreeMap<String, CategoryScore>,
    thresholds: &Thresholds,
    population: &PopulationParams,
) -> Vec<CategoryClassification> {
    let merged = normalized(breakdown);
    let mut in_scope: Vec<(&String, &CategoryScore)> = merged
        .iter()
        .filter(|(_, score)| score.is_in_scope())
        .collect();
    in_scope.sort_by_key(|(code, _)| category_order(code));

    in_scope
        .into_iter()
        .map(|(code, score)| classify(code, score, thresholds, population))
        .collect()
}
