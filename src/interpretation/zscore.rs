// src/interpretation/zscore.rs

use serde::Serialize;

/// Assumed score distribution of the test-taking population.
///
/// These are fixed modelling parameters, not estimates from real data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopulationParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            mean: 65.0,
            std_dev: 15.0,
        }
    }
}

/// Qualitative percentile band for a z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PercentileBand {
    VeryHigh,
    High,
    AboveAverage,
    SlightlyAboveAverage,
    Average,
    SlightlyBelowAverage,
    Low,
    VeryLow,
}

/// Lower bounds, checked top-down; anything below the last is `VeryLow`.
const BANDS: [(f64, PercentileBand); 7] = [
    (2.0, PercentileBand::VeryHigh),
    (1.5, PercentileBand::High),
    (1.0, PercentileBand::AboveAverage),
    (0.5, PercentileBand::SlightlyAboveAverage),
    (-0.5, PercentileBand::Average),
    (-1.0, PercentileBand::SlightlyBelowAverage),
    (-1.5, PercentileBand::Low),
];

impl PercentileBand {
    pub fn from_z(z: f64) -> Self {
        BANDS
            .iter()
            .find(|(lower, _)| z >= *lower)
            .map(|(_, band)| *band)
            .unwrap_or(Self::VeryLow)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Sangat Tinggi (Top 2.5%)",
            Self::High => "Tinggi (Top 7%)",
            Self::AboveAverage => "Di Atas Rata-rata (Top 16%)",
            Self::SlightlyAboveAverage => "Sedikit Di Atas Rata-rata (Top 31%)",
            Self::Average => "Rata-rata (31-69%)",
            Self::SlightlyBelowAverage => "Sedikit Di Bawah Rata-rata (Bottom 31%)",
            Self::Low => "Rendah (Bottom 16%)",
            Self::VeryLow => "Sangat Rendah (Bottom 7%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScoreSummary {
    /// Rounded to two decimals.
    pub value: f64,
    pub band: PercentileBand,
    pub label: &'static str,
}

/// `(percentage - mean) / std_dev`, rounded to two decimals.
/// A non-positive `std_dev` yields 0.
pub fn z_score(percentage: f64, population: &PopulationParams) -> f64 {
    if population.std_dev <= 0.0 {
        return 0.0;
    }
    let z = (percentage - population.mean) / population.std_dev;
    let rounded = (z * 100.0).round() / 100.0;
    // Avoid serializing "-0.0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Scores a percentage and classifies the rounded result.
pub fn analyze(percentage: u8, population: &PopulationParams) -> ZScoreSummary {
    let value = z_score(f64::from(percentage), population);
    let band = PercentileBand::from_z(value);
    ZScoreSummary {
        value,
        band,
        label: band.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let p = PopulationParams::default();
        assert_eq!(z_score(65.0, &p), 0.0);
        assert_eq!(z_score(95.0, &p), 2.0);
        assert_eq!(z_score(20.0, &p), -3.0);
        assert_eq!(z_score(80.0, &p), 1.0);
        // 70 -> 0.333.. -> 0.33
        assert_eq!(z_score(70.0, &p), 0.33);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(PercentileBand::from_z(2.0), PercentileBand::VeryHigh);
        assert_eq!(PercentileBand::from_z(1.99), PercentileBand::High);
        assert_eq!(PercentileBand::from_z(1.0), PercentileBand::AboveAverage);
        assert_eq!(PercentileBand::from_z(0.0), PercentileBand::Average);
        assert_eq!(PercentileBand::from_z(-0.5), PercentileBand::Average);
        assert_eq!(PercentileBand::from_z(-0.51), PercentileBand::SlightlyBelowAverage);
        assert_eq!(PercentileBand::from_z(-1.5), PercentileBand::Low);
        assert_eq!(PercentileBand::from_z(-3.0), PercentileBand::VeryLow);
    }

    #[test]
    fn test_analyze_uses_rounded_value() {
        let summary = analyze(80, &PopulationParams::default());
        assert_eq!(summary.value, 1.0);
        assert_eq!(summary.band, PercentileBand::AboveAverage);
        assert_eq!(summary.label, "Di Atas Rata-rata (Top 16%)");
    }

    #[test]
    fn test_degenerate_std_dev() {
        let p = PopulationParams {
            mean: 65.0,
            std_dev: 0.0,
        };
        let summary = analyze(100, &p);
        assert_eq!(summary.value, 0.0);
        assert_eq!(summary.band, PercentileBand::Average);
    }
}
