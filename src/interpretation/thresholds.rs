// src/interpretation/thresholds.rs

use serde::Serialize;

/// Pass threshold used when a session carries no `minimum_score`.
pub const DEFAULT_MINIMUM_SCORE: u8 = 60;

/// Classification cut-points derived from a session's pass threshold.
///
/// Always ordered `poor <= average <= good <= excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub excellent: u8,
    pub good: u8,
    pub average: u8,
    pub poor: u8,
}

/// Where a percentage falls on the session-relative scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdBand {
    VeryPoor,
    Poor,
    Average,
    Good,
    Excellent,
}

impl ThresholdBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Sangat Baik",
            Self::Good => "Baik",
            Self::Average => "Cukup",
            Self::Poor => "Kurang",
            Self::VeryPoor => "Sangat Kurang",
        }
    }
}

/// Pass/fail outcome against the session's minimum score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "LULUS")]
    Pass,
    #[serde(rename = "TIDAK_LULUS")]
    Fail,
}

impl Verdict {
    pub fn from_percentage(percentage: u8, minimum_score: u8) -> Self {
        if percentage >= minimum_score {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "LULUS",
            Self::Fail => "TIDAK LULUS",
        }
    }
}

impl Thresholds {
    /// Derives the banded scale from a pass threshold (clamped to 100).
    ///
    /// For very low thresholds the raw `poor` floor of 40 would sit above
    /// `average`, and for very high ones `poor` would pass 70; in both cases
    /// `poor` is pulled down to `average`.
    pub fn derive(minimum_score: u8) -> Self {
        let m = i32::from(minimum_score.min(100));

        let excellent = (m + 30).min(90);
        let good = (m + 20).min(80).min(excellent);
        let average = (m + 10).min(70).min(good);
        let poor = (m - 20).max(40).min(average);

        Self {
            excellent: excellent as u8,
            good: good as u8,
            average: average as u8,
            poor: poor as u8,
        }
    }

    pub fn for_session(minimum_score: Option<u8>) -> Self {
        Self::derive(minimum_score.unwrap_or(DEFAULT_MINIMUM_SCORE))
    }

    pub fn band(&self, percentage: u8) -> ThresholdBand {
        if percentage >= self.excellent {
            ThresholdBand::Excellent
        } else if percentage >= self.good {
            ThresholdBand::Good
        } else if percentage >= self.average {
            ThresholdBand::Average
        } else if percentage >= self.poor {
            ThresholdBand::Poor
        } else {
            ThresholdBand::VeryPoor
        }
    }
}
