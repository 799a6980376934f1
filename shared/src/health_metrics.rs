//! Health metrics calculations module
//!
//! Primary metrics derived directly from the profile: BMR, BMI, waist-hip
//! ratio and TDEE.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Table-Driven Categories**: Category bounds live in lookup tables
//! 3. **No Clamping**: Garbage in, NaN/Infinity out; range checks belong to validation

use crate::profile::{Sex, UserProfile};
use serde::{Deserialize, Serialize};

// ============================================================================
// BMR Calculations
// ============================================================================

/// Formula used for a BMR estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Sex-specific weight/height/age equation (used without body fat)
    MifflinStJeor,
    /// Lean-body-mass equation (used when body fat is known)
    KatchMcArdle,
}

/// Sex-specific BMR from weight, height and age
///
/// Men: 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let age = age as f64;
    match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.33 * age,
    }
}

/// Calculate BMR using Katch-McArdle equation (requires body fat)
///
/// BMR = 370 + 21.6 × LBM(kg)
/// LBM = weight × (1 - body_fat_percent/100)
pub fn calculate_bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_body_mass
}

/// Pick the BMR formula for a profile: lean mass when body fat is known
pub fn bmr_formula(profile: &UserProfile) -> BmrFormula {
    match profile.body_fat() {
        Some(_) => BmrFormula::KatchMcArdle,
        None => BmrFormula::MifflinStJeor,
    }
}

/// Calculate Basal Metabolic Rate (kcal/day)
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    match profile.body_fat() {
        Some(body_fat) => calculate_bmr_katch_mcardle(profile.weight_kg, body_fat),
        None => calculate_bmr_mifflin(
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            profile.sex,
        ),
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, profile: &UserProfile) -> f64 {
    bmr * profile.activity_level.multiplier()
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    Normal,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese I")]
    ObeseClass1,
    #[serde(rename = "Obese II")]
    ObeseClass2,
    #[serde(rename = "Obese III")]
    ObeseClass3,
}

/// BMI bands as half-open `[min, max)` ranges, scanned in order
pub const BMI_CATEGORY_TABLE: [(BmiCategory, f64, f64); 6] = [
    (BmiCategory::Underweight, 0.0, 18.5),
    (BmiCategory::Normal, 18.5, 25.0),
    (BmiCategory::Overweight, 25.0, 30.0),
    (BmiCategory::ObeseClass1, 30.0, 35.0),
    (BmiCategory::ObeseClass2, 35.0, 40.0),
    (BmiCategory::ObeseClass3, 40.0, 100.0),
];

impl BmiCategory {
    /// Get the BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        let (_, min, max) = BMI_CATEGORY_TABLE[self.index()];
        (min, max)
    }

    /// Position of this category in the table (0-5)
    pub fn index(&self) -> usize {
        match self {
            BmiCategory::Underweight => 0,
            BmiCategory::Normal => 1,
            BmiCategory::Overweight => 2,
            BmiCategory::ObeseClass1 => 3,
            BmiCategory::ObeseClass2 => 4,
            BmiCategory::ObeseClass3 => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese I",
            BmiCategory::ObeseClass2 => "Obese II",
            BmiCategory::ObeseClass3 => "Obese III",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
    pub category_index: usize,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
///
/// Values outside every band (100 and above, negatives, NaN) fall back to
/// the last category.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BMI_CATEGORY_TABLE
        .iter()
        .find(|(_, min, max)| bmi >= *min && bmi < *max)
        .map(|(category, _, _)| *category)
        .unwrap_or(BmiCategory::ObeseClass3)
}

/// Calculate complete BMI result
pub fn calculate_bmi_result(weight_kg: f64, height_cm: f64) -> BmiResult {
    let value = calculate_bmi(weight_kg, height_cm);
    let category = classify_bmi(value);
    BmiResult {
        value,
        category,
        category_index: category.index(),
    }
}

// ============================================================================
// Waist-Hip Ratio
// ============================================================================

/// Fat distribution category from waist-hip ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhrCategory {
    Peripheral,
    Balanced,
    Central,
    Risky,
}

/// Inclusive upper ratio bound per category; anything above the last is risky
pub const WHR_CATEGORY_TABLE: [(WhrCategory, f64); 3] = [
    (WhrCategory::Peripheral, 0.85),
    (WhrCategory::Balanced, 0.90),
    (WhrCategory::Central, 0.94),
];

impl WhrCategory {
    pub fn description(&self) -> &'static str {
        match self {
            WhrCategory::Peripheral => {
                "Fat is stored mostly around the hips and thighs. This pattern carries the lowest cardiometabolic risk."
            }
            WhrCategory::Balanced => "Fat is distributed evenly between waist and hips.",
            WhrCategory::Central => {
                "Fat is starting to collect around the abdomen. Health risk is moderately raised."
            }
            WhrCategory::Risky => {
                "Most fat is stored around the abdomen. This pattern is linked to a high cardiometabolic risk."
            }
        }
    }

    /// Illustration index (0-3), one per band
    pub fn image_index(&self) -> u8 {
        match self {
            WhrCategory::Peripheral => 0,
            WhrCategory::Balanced => 1,
            WhrCategory::Central => 2,
            WhrCategory::Risky => 3,
        }
    }
}

/// Waist-hip ratio result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhrResult {
    pub value: f64,
    pub category: WhrCategory,
    pub description: String,
    pub image_index: u8,
}

/// Classify a waist-hip ratio; the same bands apply to both sexes
pub fn classify_whr(ratio: f64) -> WhrCategory {
    WHR_CATEGORY_TABLE
        .iter()
        .find(|(_, upper)| ratio <= *upper)
        .map(|(category, _)| *category)
        .unwrap_or(WhrCategory::Risky)
}

/// Waist-hip ratio, only when both circumferences are supplied
pub fn calculate_whr(profile: &UserProfile) -> Option<WhrResult> {
    let waist = profile.waist_cm()?;
    let hips = profile.hips_cm()?;
    let value = waist / hips;
    let category = classify_whr(value);
    Some(WhrResult {
        value,
        category,
        description: category.description().to_string(),
        image_index: category.image_index(),
    })
}
