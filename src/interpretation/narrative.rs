// src/interpretation/narrative.rs

use std::cmp::Reverse;

use serde::Serialize;

use crate::interpretation::{
    catalog::{self, NarrativeTier},
    category::{CategoryClassification, category_order},
};

/// Literal cut-points for grouping categories in the narrative. These do not
/// follow the session thresholds.
const EXCELLENT_MIN: u8 = 85;
const GOOD_MIN: u8 = 70;
const AVERAGE_MIN: u8 = 55;

/// Category display names grouped by performance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryPartitions {
    pub excellent: Vec<String>,
    pub good: Vec<String>,
    pub average: Vec<String>,
    pub weak: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusCategory {
    pub code: String,
    pub name: String,
    pub percentage: u8,
}

impl From<&CategoryClassification> for FocusCategory {
    fn from(c: &CategoryClassification) -> Self {
        Self {
            code: c.code.clone(),
            name: c.name.clone(),
            percentage: c.percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub partitions: CategoryPartitions,
    pub weakest: Option<FocusCategory>,
    pub strongest: Option<FocusCategory>,
    /// Percentage of study time suggested for the weakest category.
    pub weakest_time_share: Option<u8>,
    pub interpretation: String,
    pub recommendation: String,
}

pub fn partition(categories: &[CategoryClassification]) -> CategoryPartitions {
    let mut partitions = CategoryPartitions::default();
    for c in categories {
        let bucket = if c.percentage >= EXCELLENT_MIN {
            &mut partitions.excellent
        } else if c.percentage >= GOOD_MIN {
            &mut partitions.good
        } else if c.percentage >= AVERAGE_MIN {
            &mut partitions.average
        } else {
            &mut partitions.weak
        };
        bucket.push(c.name.clone());
    }
    partitions
}

pub fn tier(overall: u8) -> &'static NarrativeTier {
    catalog::NARRATIVE_TIERS
        .iter()
        .find(|t| overall >= t.min_percentage)
        .unwrap_or(&catalog::NARRATIVE_TIERS[catalog::NARRATIVE_TIERS.len() - 1])
}

/// Lowest percentage; ties go to the earlier category in canonical order.
pub fn weakest(categories: &[CategoryClassification]) -> Option<&CategoryClassification> {
    categories
        .iter()
        .min_by_key(|c| (c.percentage, category_order(&c.code)))
}

/// Highest percentage; ties go to the earlier category in canonical order.
pub fn strongest(categories: &[CategoryClassification]) -> Option<&CategoryClassification> {
    categories
        .iter()
        .min_by_key(|c| (Reverse(c.percentage), category_order(&c.code)))
}

fn interpretation_text(tier: &NarrativeTier, overall: &str, partitions: &CategoryPartitions) -> String {
    let mut text = catalog::render(tier.interpretation, &[("overall", overall)]);
    for (fragment, names) in [
        (catalog::EXCELLENT_FRAGMENT, &partitions.excellent),
        (catalog::GOOD_FRAGMENT, &partitions.good),
        (catalog::AVERAGE_FRAGMENT, &partitions.average),
        (catalog::WEAK_FRAGMENT, &partitions.weak),
    ] {
        if !names.is_empty() {
            let joined = catalog::join_names(names);
            text.push_str(&catalog::render(fragment, &[("names", joined.as_str())]));
        }
    }
    text
}

/// Builds the overall interpretation and recommendation paragraphs.
pub fn compose(overall: u8, categories: &[CategoryClassification]) -> Narrative {
    let tier = tier(overall);
    let overall_text = overall.to_string();
    let partitions = partition(categories);
    let interpretation = interpretation_text(tier, overall_text.as_str(), &partitions);

    let weak = weakest(categories);
    let strong = strongest(categories);

    let mut recommendation = catalog::render(tier.recommendation, &[("overall", overall_text.as_str())]);
    let mut weakest_time_share = None;

    if let (Some(weak), Some(strong)) = (weak, strong) {
        let weak_pct = weak.percentage.to_string();
        let strong_pct = strong.percentage.to_string();
        let values = [
            ("weakest", weak.name.as_str()),
            ("weakest_pct", weak_pct.as_str()),
            ("strongest", strong.name.as_str()),
            ("strongest_pct", strong_pct.as_str()),
        ];

        if categories.len() == 1 {
            recommendation.push_str(&catalog::render(catalog::SINGLE_FOCUS_FRAGMENT, &values));
        } else {
            let weak_share = tier.weakest_share.to_string();
            let strong_share = (100 - tier.weakest_share).to_string();
            recommendation.push_str(&catalog::render(tier.focus, &values));
            recommendation.push_str(&catalog::render(
                catalog::ALLOCATION_FRAGMENT,
                &[
                    ("weakest", weak.name.as_str()),
                    ("strongest", strong.name.as_str()),
                    ("weakest_share", weak_share.as_str()),
                    ("strongest_share", strong_share.as_str()),
                ],
            ));
            weakest_time_share = Some(tier.weakest_share);
        }

        let time_note = catalog::lowercase_first(weak.time_management);
        recommendation.push_str(&catalog::render(
            catalog::TIME_NOTE_FRAGMENT,
            &[("time_note", time_note.as_str())],
        ));
    }

    Narrative {
        partitions,
        weakest: weak.map(FocusCategory::from),
        strongest: strong.map(FocusCategory::from),
        weakest_time_share,
        interpretation,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpretation::{
        category::classify, thresholds::Thresholds, zscore::PopulationParams,
    };
    use crate::models::session::CategoryScore;

    fn category(code: &str, score: u32) -> CategoryClassification {
        classify(
            code,
            &CategoryScore::new(score, 100),
            &Thresholds::derive(60),
            &PopulationParams::default(),
        )
    }

    #[test]
    fn test_partition_uses_literal_cut_points() {
        let cats = vec![
            category("TES_VERBAL", 85),
            category("TES_ANGKA", 84),
            category("TES_LOGIKA", 55),
            category("TES_GAMBAR", 54),
        ];
        let p = partition(&cats);
        assert_eq!(p.excellent, vec!["Tes Verbal"]);
        assert_eq!(p.good, vec!["Tes Angka"]);
        assert_eq!(p.average, vec!["Tes Logika"]);
        assert_eq!(p.weak, vec!["Tes Gambar"]);
    }

    #[test]
    fn test_tier_selection() {
        assert_eq!(tier(100).min_percentage, 85);
        assert_eq!(tier(85).min_percentage, 85);
        assert_eq!(tier(84).min_percentage, 75);
        assert_eq!(tier(65).min_percentage, 65);
        assert_eq!(tier(55).min_percentage, 55);
        assert_eq!(tier(0).min_percentage, 0);
    }

    #[test]
    fn test_weakest_and_strongest_ties_follow_canonical_order() {
        let cats = vec![
            category("TES_GAMBAR", 60),
            category("TES_LOGIKA", 90),
            category("TES_ANGKA", 60),
            category("TES_VERBAL", 90),
        ];
        assert_eq!(weakest(&cats).unwrap().code, "TES_ANGKA");
        assert_eq!(strongest(&cats).unwrap().code, "TES_VERBAL");
    }

    #[test]
    fn test_compose_mentions_partitions_and_allocation() {
        let cats = vec![category("TES_VERBAL", 90), category("TES_ANGKA", 50)];
        let n = compose(70, &cats);

        assert!(n.interpretation.contains("70%"));
        assert!(n.interpretation.contains("sangat menonjol terlihat pada Tes Verbal"));
        assert!(n.interpretation.contains("Aspek Tes Angka masih memerlukan"));
        assert!(n.recommendation.contains("Tes Angka (50%)"));
        assert!(n.recommendation.contains("65% waktu belajar untuk Tes Angka dan 35% untuk Tes Verbal"));
        assert!(!n.recommendation.contains('{'));
        assert_eq!(n.weakest_time_share, Some(65));
        assert_eq!(n.weakest.unwrap().code, "TES_ANGKA");
        assert_eq!(n.strongest.unwrap().code, "TES_VERBAL");
    }

    #[test]
    fn test_compose_single_category() {
        let n = compose(80, &[category("TES_LOGIKA", 80)]);
        assert!(n.recommendation.contains("Fokuskan latihan pada Tes Logika (80%)"));
        assert!(!n.recommendation.contains("Alokasikan"));
        assert_eq!(n.weakest_time_share, None);
    }

    #[test]
    fn test_compose_without_categories() {
        let n = compose(40, &[]);
        assert!(n.weakest.is_none());
        assert!(n.strongest.is_none());
        assert_eq!(
            n.recommendation,
            catalog::NARRATIVE_TIERS[4].recommendation
        );
        assert!(!n.interpretation.contains('{'));
    }
}
