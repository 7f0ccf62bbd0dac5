// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! BMI computation kernel (UI-agnostic).
//!
//! Responsibilities:
//! - Compute BMI from weight and height.
//! - Classify a BMI value into a category and map it to advice text.
//! - Derive the Hamwi-style ideal weight range from height and gender.

use anyhow::{Result, bail};

use crate::models::profile::Gender;

/// Compute BMI as weight(kg) / height(m)².
///
/// Fails when either input is non-positive; validated UI flows never hit
/// this case, but the kernel guards its own domain.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Result<f64> {
    if height_m <= 0.0 {
        bail!("Height must be greater than zero (got {height_m})");
    }
    if weight_kg <= 0.0 {
        bail!("Weight must be greater than zero (got {weight_kg})");
    }
    Ok(weight_kg / (height_m * height_m))
}

/// Coarse health-range bucket derived from a BMI value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// All categories in ascending BMI order.
pub const CATEGORIES: [Category; 4] = [
    Category::Underweight,
    Category::Normal,
    Category::Overweight,
    Category::Obese,
];

impl Category {
    /// Classify a BMI value against the canonical threshold table.
    ///
    /// The bands partition the line: [0, 18.5) underweight, [18.5, 25)
    /// normal, [25, 30) overweight, [30, ∞) obese.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Category::Underweight
        } else if bmi < 25.0 {
            Category::Normal
        } else if bmi < 30.0 {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Recommendation text shown alongside the category. Total mapping.
    pub fn advice(&self) -> &'static str {
        match self {
            Category::Underweight => "Eat more frequently and choose nutrient-rich foods.",
            Category::Normal => "Maintain your healthy lifestyle!",
            Category::Overweight => "Try to include daily walking and reduce sugary snacks.",
            Category::Obese => "Adopt a structured weight loss plan with professional support.",
        }
    }

    /// Lower (inclusive) and upper (exclusive) BMI bound of this band.
    ///
    /// The open-ended obese band is capped at the chart axis maximum.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Category::Underweight => (0.0, 18.5),
            Category::Normal => (18.5, 25.0),
            Category::Overweight => (25.0, 30.0),
            Category::Obese => (30.0, CHART_AXIS_MAX),
        }
    }
}

/// Upper end of the BMI axis used by the band chart.
pub const CHART_AXIS_MAX: f64 = 40.0;

/// Ideal weight range (low, high) in kilograms for a given height and gender.
///
/// Hamwi-style linear formula: base (50 kg male, 45.5 kg female) plus 2.3 kg
/// per inch of height above 5 feet. The range is ±10% around the ideal,
/// rounded to one decimal.
pub fn ideal_weight_range(height_m: f64, gender: Gender) -> (f64, f64) {
    let base = match gender {
        Gender::Male => 50.0,
        Gender::Female => 45.5,
    };
    let ideal = base + 2.3 * ((height_m * 100.0 - 152.4) / 2.54);
    (round1(ideal * 0.9), round1(ideal * 1.1))
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_bmi_is_exact_quotient() {
        let bmi = compute_bmi(70.0, 1.75).unwrap();
        assert_eq!(bmi, 70.0 / (1.75 * 1.75));
    }

    #[test]
    fn compute_bmi_rejects_non_positive_height() {
        assert!(compute_bmi(70.0, 0.0).is_err());
        assert!(compute_bmi(70.0, -1.75).is_err());
    }

    #[test]
    fn compute_bmi_rejects_non_positive_weight() {
        assert!(compute_bmi(0.0, 1.75).is_err());
        assert!(compute_bmi(-70.0, 1.75).is_err());
    }

    // Boundary values belong to the upper band; the table has no gaps.
    #[test]
    fn classify_uses_canonical_boundaries() {
        assert_eq!(Category::classify(0.0), Category::Underweight);
        assert_eq!(Category::classify(18.4999), Category::Underweight);
        assert_eq!(Category::classify(18.5), Category::Normal);
        assert_eq!(Category::classify(24.95), Category::Normal);
        assert_eq!(Category::classify(25.0), Category::Overweight);
        assert_eq!(Category::classify(29.95), Category::Overweight);
        assert_eq!(Category::classify(30.0), Category::Obese);
        assert_eq!(Category::classify(55.0), Category::Obese);
    }

    // The divergent table from the legacy calculator let (24.9, 25) and
    // (29.9, 30) fall through to Obese; the canonical table must not.
    #[test]
    fn classify_covers_legacy_gap_values() {
        assert_eq!(Category::classify(24.95), Category::Normal);
        assert_eq!(Category::classify(29.95), Category::Overweight);
    }

    #[test]
    fn band_bounds_partition_the_axis() {
        let mut expected_low = 0.0;
        for category in CATEGORIES {
            let (low, high) = category.bounds();
            assert_eq!(low, expected_low, "band for {:?} leaves a gap", category);
            assert!(high > low);
            expected_low = high;
        }
        assert_eq!(expected_low, CHART_AXIS_MAX);
    }

    #[test]
    fn advice_is_total_and_non_empty() {
        for category in CATEGORIES {
            assert!(!category.advice().is_empty());
            assert!(!category.label().is_empty());
        }
    }

    #[test]
    fn ideal_weight_range_matches_hamwi_reference() {
        // 1.75 m male: ideal = 50 + 2.3 * ((175 - 152.4) / 2.54) ≈ 70.47 kg.
        let (low, high) = ideal_weight_range(1.75, Gender::Male);
        assert_eq!(low, 63.4);
        assert_eq!(high, 77.5);
    }

    #[test]
    fn ideal_weight_range_uses_female_base() {
        let (low, high) = ideal_weight_range(1.75, Gender::Female);
        let ideal = 45.5 + 2.3 * ((175.0 - 152.4) / 2.54);
        assert_eq!(low, round1(ideal * 0.9));
        assert_eq!(high, round1(ideal * 1.1));
        // Female range sits strictly below the male range for the same height.
        assert!(low < 63.4);
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(70.4699), 70.5);
        assert_eq!(round1(63.42), 63.4);
    }
}
