// src/models/session.rs

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lifecycle state of a test session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Ongoing,
    Completed,
    Abandoned,
}

/// A score/max pair as stored for categories and RIASEC dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePair {
    pub score: u32,
    pub max_score: u32,
}

/// One entry of `categoryBreakdown`.
///
/// The stored `percentage` is accepted for compatibility with the session API
/// but never read: every displayed ratio is recomputed from `score`/`max_score`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: u32,
    pub max_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl CategoryScore {
    pub fn new(score: u32, max_score: u32) -> Self {
        Self {
            score,
            max_score,
            percentage: None,
        }
    }

    /// A category takes part in reporting only if the test contained it.
    pub fn is_in_scope(&self) -> bool {
        self.max_score > 0
    }
}

/// Six RIASEC interest dimensions. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiasecScores {
    #[serde(default)]
    pub realistic: Option<ScorePair>,
    #[serde(default)]
    pub investigative: Option<ScorePair>,
    #[serde(default)]
    pub artistic: Option<ScorePair>,
    #[serde(default)]
    pub social: Option<ScorePair>,
    #[serde(default)]
    pub enterprising: Option<ScorePair>,
    #[serde(default)]
    pub conventional: Option<ScorePair>,
}

impl RiasecScores {
    /// Dimensions in R, I, A, S, E, C order.
    pub fn as_array(&self) -> [Option<ScorePair>; 6] {
        [
            self.realistic,
            self.investigative,
            self.artistic,
            self.social,
            self.enterprising,
            self.conventional,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(Option::is_none)
    }
}

/// Multiple-intelligence sub-scores, 0-100 each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MultipleIntelligences {
    #[validate(range(max = 100))]
    pub linguistic: u8,
    #[validate(range(max = 100))]
    pub logical_mathematical: u8,
    #[validate(range(max = 100))]
    pub spatial: u8,
    #[validate(range(max = 100))]
    pub musical: u8,
    #[validate(range(max = 100))]
    pub bodily_kinesthetic: u8,
    #[validate(range(max = 100))]
    pub interpersonal: u8,
    #[validate(range(max = 100))]
    pub intrapersonal: u8,
    #[validate(range(max = 100))]
    pub naturalist: u8,
}

/// Snapshot of a test session as returned by `GET /api/test-sessions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestSession {
    pub id: i64,
    pub test_id: i64,
    pub user_id: i64,
    pub status: SessionStatus,

    pub score: u32,
    pub max_score: u32,

    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,

    /// Pass threshold as a percentage. Defaults to 60 when absent.
    #[serde(default, rename = "minimum_score")]
    #[validate(range(max = 100))]
    pub minimum_score: Option<u8>,

    /// Keyed by category code (`TES_VERBAL`, `TES_ANGKA`, ...).
    #[serde(default)]
    pub category_breakdown: BTreeMap<String, CategoryScore>,

    #[serde(default)]
    pub riasec: Option<RiasecScores>,

    #[serde(default, rename = "holland_code")]
    #[validate(custom(function = validate_holland_code))]
    pub holland_code: Option<String>,

    #[serde(default, rename = "aptitude_score_total")]
    pub aptitude_score_total: Option<u32>,
    #[serde(default, rename = "aptitude_max_score_total")]
    pub aptitude_max_score_total: Option<u32>,

    #[serde(default)]
    #[validate(nested)]
    pub multiple_intelligences: Option<MultipleIntelligences>,
}

static HOLLAND_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)[RIASEC]{1,6}$").expect("static regex"));

fn validate_holland_code(code: &str) -> Result<(), validator::ValidationError> {
    let trimmed = code.trim();
    if trimmed.is_empty() || HOLLAND_CODE.is_match(trimmed) {
        return Ok(());
    }
    Err(validator::ValidationError::new("invalid_holland_code"))
}

impl TestSession {
    /// Checks `score <= max_score` on the session, every category and every
    /// RIASEC dimension. Returns a message naming the first offending field.
    pub fn check_score_bounds(&self) -> Result<(), String> {
        if self.score > self.max_score {
            return Err(format!(
                "score ({}) exceeds maxScore ({})",
                self.score, self.max_score
            ));
        }

        for (code, category) in &self.category_breakdown {
            if category.score > category.max_score {
                return Err(format!(
                    "categoryBreakdown.{}: score ({}) exceeds maxScore ({})",
                    code, category.score, category.max_score
                ));
            }
        }

        if let Some(riasec) = &self.riasec {
            for (initial, pair) in ['R', 'I', 'A', 'S', 'E', 'C'].iter().zip(riasec.as_array()) {
                if let Some(pair) = pair {
                    if pair.score > pair.max_score {
                        return Err(format!(
                            "riasec.{}: score ({}) exceeds maxScore ({})",
                            initial, pair.score, pair.max_score
                        ));
                    }
                }
            }
        }

        if let (Some(total), Some(max)) = (self.aptitude_score_total, self.aptitude_max_score_total)
        {
            if total > max {
                return Err(format!(
                    "aptitude_score_total ({}) exceeds aptitude_max_score_total ({})",
                    total, max
                ));
            }
        }

        Ok(())
    }

    /// Elapsed seconds between start and end, when both are known.
    pub fn duration_seconds(&self) -> Option<i64> {
        let (start, end) = (self.start_time?, self.end_time?);
        let seconds = (end - start).num_seconds();
        (seconds >= 0).then_some(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session() -> TestSession {
        TestSession {
            id: 1,
            test_id: 2,
            user_id: 3,
            status: SessionStatus::Completed,
            score: 10,
            max_score: 20,
            start_time: None,
            end_time: None,
            minimum_score: None,
            category_breakdown: BTreeMap::new(),
            riasec: None,
            holland_code: None,
            aptitude_score_total: None,
            aptitude_max_score_total: None,
            multiple_intelligences: None,
        }
    }

    #[test]
    fn test_deserialize_mixed_case_payload() {
        let raw = serde_json::json!({
            "id": 7,
            "testId": 1,
            "userId": 9,
            "status": "COMPLETED",
            "score": 80,
            "maxScore": 100,
            "minimum_score": 70,
            "categoryBreakdown": {
                "TES_VERBAL": {"score": 40, "maxScore": 50, "percentage": 80.0}
            },
            "holland_code": "RIC"
        });

        let parsed: TestSession = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.status, SessionStatus::Completed);
        assert_eq!(parsed.minimum_score, Some(70));
        assert_eq!(parsed.category_breakdown["TES_VERBAL"].max_score, 50);
        assert_eq!(parsed.holland_code.as_deref(), Some("RIC"));
        assert!(parsed.riasec.is_none());
    }

    #[test]
    fn test_score_bounds() {
        let mut s = session();
        assert!(s.check_score_bounds().is_ok());

        s.category_breakdown
            .insert("TES_ANGKA".to_string(), CategoryScore::new(6, 5));
        let err = s.check_score_bounds().unwrap_err();
        assert!(err.contains("TES_ANGKA"));
    }

    #[test]
    fn test_validation_rejects_out_of_range_fields() {
        let mut s = session();
        s.minimum_score = Some(101);
        assert!(s.validate().is_err());

        let mut s = session();
        s.holland_code = Some("RXZ".to_string());
        assert!(s.validate().is_err());

        let mut s = session();
        s.holland_code = Some("ric".to_string());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_duration_seconds() {
        let mut s = session();
        assert_eq!(s.duration_seconds(), None);

        s.start_time = Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
        s.end_time = Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
        assert_eq!(s.duration_seconds(), Some(5400));

        s.end_time = Some(Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0).unwrap());
        assert_eq!(s.duration_seconds(), None);
    }
}
