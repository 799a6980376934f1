//! Target weight ranges and waist target
//!
//! Every range is a set of BMI points projected onto the user's height:
//! weight = BMI × height(m)².

use crate::profile::Sex;
use serde::{Deserialize, Serialize};

/// A weight range with a preferred target inside it, all in kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub lower: f64,
    pub upper: f64,
    pub target: f64,
}

/// BMI points defining a range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiBounds {
    pub lower: f64,
    pub target: f64,
    pub upper: f64,
}

impl BmiBounds {
    /// Project these BMI points onto a height
    pub fn to_weight_range(&self, height_cm: f64) -> WeightRange {
        let height_m_sq = height_m_squared(height_cm);
        WeightRange {
            lower: self.lower * height_m_sq,
            upper: self.upper * height_m_sq,
            target: self.target * height_m_sq,
        }
    }
}

pub const IDEAL_BMI: BmiBounds = BmiBounds { lower: 20.0, target: 22.0, upper: 24.0 };
pub const ADONIS_BMI_MALE: BmiBounds = BmiBounds { lower: 21.0, target: 23.0, upper: 25.0 };
pub const ADONIS_BMI_FEMALE: BmiBounds = BmiBounds { lower: 20.0, target: 22.0, upper: 24.0 };

/// Body-composition target BMI limits
pub const BODY_COMP_BMI_MIN: f64 = 18.5;
pub const BODY_COMP_BMI_MAX: f64 = 28.0;

/// Half-width of the body-composition range, in BMI points
pub const BODY_COMP_BMI_SPREAD: f64 = 1.5;

/// Shoulder-to-height ratio treated as average build
pub const REFERENCE_SHOULDER_RATIO: f64 = 0.26;

fn height_m_squared(height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    height_m * height_m
}

/// Ideal weight range (BMI 20-24, target 22), the same for both sexes
pub fn calculate_ideal_weight_range(height_cm: f64) -> WeightRange {
    IDEAL_BMI.to_weight_range(height_cm)
}

/// Athletic "Adonis" weight range
pub fn calculate_adonis_weight_range(height_cm: f64, sex: Sex) -> WeightRange {
    match sex {
        Sex::Male => ADONIS_BMI_MALE.to_weight_range(height_cm),
        Sex::Female => ADONIS_BMI_FEMALE.to_weight_range(height_cm),
    }
}

/// Target BMI adjusted for body fat and (men only) shoulder width
pub fn body_comp_target_bmi(
    height_cm: f64,
    sex: Sex,
    body_fat_percent: Option<f64>,
    shoulder_cm: Option<f64>,
) -> f64 {
    let (mut bmi, optimal_body_fat) = match sex {
        Sex::Male => (22.5, 15.0),
        Sex::Female => (21.5, 23.0),
    };

    if let Some(body_fat) = body_fat_percent {
        bmi -= (body_fat - optimal_body_fat) * 0.1;
    }

    if let (Some(shoulder), Sex::Male) = (shoulder_cm, sex) {
        let ratio = shoulder / height_cm;
        bmi += (ratio - REFERENCE_SHOULDER_RATIO) * 10.0;
    }

    bmi.clamp(BODY_COMP_BMI_MIN, BODY_COMP_BMI_MAX)
}

/// Body-composition-adjusted weight range
///
/// Lower/upper sit 1.5 BMI points either side of the target.
pub fn calculate_body_comp_adjusted_weight(
    height_cm: f64,
    sex: Sex,
    body_fat_percent: Option<f64>,
    shoulder_cm: Option<f64>,
) -> WeightRange {
    let height_m_sq = height_m_squared(height_cm);
    let target = body_comp_target_bmi(height_cm, sex, body_fat_percent, shoulder_cm) * height_m_sq;
    let spread = BODY_COMP_BMI_SPREAD * height_m_sq;
    WeightRange {
        lower: target - spread,
        upper: target + spread,
        target,
    }
}

/// Ideal waist circumference (cm): half of height
///
/// `sex` is accepted for symmetry with the range functions; the waist-to-height
/// heuristic is deliberately the same for both.
pub fn calculate_ideal_waist_size(height_cm: f64, _sex: Sex) -> f64 {
    height_cm * 0.5
}
