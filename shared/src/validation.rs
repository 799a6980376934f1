//! Input validation functions
//!
//! Validation is advisory: it reports out-of-range input per field but never
//! stops a calculation. Callers decide whether to block on the report.

use crate::profile::{Measurements, PartialProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inclusive valid range for a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    /// Unit suffix used in messages
    pub unit: &'static str,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const AGE_RANGE: FieldRange = FieldRange { min: 10.0, max: 120.0, unit: " years" };
pub const HEIGHT_RANGE: FieldRange = FieldRange { min: 50.0, max: 250.0, unit: " cm" };
pub const WEIGHT_RANGE: FieldRange = FieldRange { min: 10.0, max: 227.0, unit: " kg" };
pub const BODY_FAT_RANGE: FieldRange = FieldRange { min: 5.0, max: 45.0, unit: "%" };
pub const WAIST_RANGE: FieldRange = FieldRange { min: 30.0, max: 200.0, unit: " cm" };
pub const HIPS_RANGE: FieldRange = FieldRange { min: 40.0, max: 220.0, unit: " cm" };
pub const NECK_RANGE: FieldRange = FieldRange { min: 20.0, max: 60.0, unit: " cm" };
pub const SHOULDER_RANGE: FieldRange = FieldRange { min: 30.0, max: 130.0, unit: " cm" };

/// Outcome of validating a (possibly partial) profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Messages that count against overall validity
    pub errors: Vec<String>,
    /// Every out-of-range field, keyed by field name, for inline display
    pub field_errors: BTreeMap<String, String>,
}

fn check_range(field: &str, value: f64, range: FieldRange) -> Result<(), String> {
    let label = get_field_display_label(field);
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", label));
    }
    if !range.contains(value) {
        return Err(format!(
            "{} must be between {} and {}{}",
            label, range.min, range.max, range.unit
        ));
    }
    Ok(())
}

/// Validate age (years)
pub fn validate_age(age: u32) -> Result<(), String> {
    check_range("age", age as f64, AGE_RANGE)
}

/// Validate height (cm)
///
/// Accepts the full 50-250 cm range even though input widgets are narrower.
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    check_range("height", height_cm, HEIGHT_RANGE)
}

/// Validate weight (kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    check_range("weight", weight_kg, WEIGHT_RANGE)
}

/// Validate body fat percentage
pub fn validate_body_fat(body_fat_percent: f64) -> Result<(), String> {
    check_range("bodyFat", body_fat_percent, BODY_FAT_RANGE)
}

pub fn validate_waist_cm(waist_cm: f64) -> Result<(), String> {
    check_range("waist", waist_cm, WAIST_RANGE)
}

pub fn validate_hips_cm(hips_cm: f64) -> Result<(), String> {
    check_range("hips", hips_cm, HIPS_RANGE)
}

pub fn validate_neck_cm(neck_cm: f64) -> Result<(), String> {
    check_range("neck", neck_cm, NECK_RANGE)
}

pub fn validate_shoulder_cm(shoulder_cm: f64) -> Result<(), String> {
    check_range("shoulder", shoulder_cm, SHOULDER_RANGE)
}

// ============================================================================
// Profile Validation
// ============================================================================

#[derive(Default)]
struct Report {
    errors: Vec<String>,
    field_errors: BTreeMap<String, String>,
}

impl Report {
    fn check(&mut self, field: &str, outcome: Option<Result<(), String>>, blocking: bool) {
        if let Some(Err(message)) = outcome {
            if blocking {
                self.errors.push(message.clone());
            }
            self.field_errors.insert(field.to_string(), message);
        }
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            field_errors: self.field_errors,
        }
    }
}

/// Range-check every supplied field of a profile
///
/// Missing fields are skipped. Circumference errors always appear in
/// `field_errors`, but only count against `is_valid` when
/// `measurements_optional` is set.
pub fn validate_user_data(profile: &PartialProfile, measurements_optional: bool) -> ValidationResult {
    let mut report = Report::default();

    report.check("age", profile.age.map(validate_age), true);
    report.check("height", profile.height_cm.map(validate_height_cm), true);
    report.check("weight", profile.weight_kg.map(validate_weight_kg), true);
    report.check("bodyFat", profile.body_fat_percent.map(validate_body_fat), true);

    let m = profile.measurements.unwrap_or_default();
    let Measurements {
        waist_cm,
        hips_cm,
        neck_cm,
        shoulder_cm,
    } = m;
    report.check("waist", waist_cm.map(validate_waist_cm), measurements_optional);
    report.check("hips", hips_cm.map(validate_hips_cm), measurements_optional);
    report.check("neck", neck_cm.map(validate_neck_cm), measurements_optional);
    report.check("shoulder", shoulder_cm.map(validate_shoulder_cm), measurements_optional);

    report.finish()
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map field names to display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "height" | "heightCm" => "Height",
        "weight" | "weightKg" => "Weight",
        "bodyFat" | "bodyFatPercent" => "Body fat",
        "waist" | "waistCm" => "Waist",
        "hips" | "hipsCm" => "Hips",
        "neck" | "neckCm" => "Neck",
        "shoulder" | "shoulderCm" => "Shoulder width",
        "sex" => "Sex",
        "activityLevel" => "Activity Level",
        _ => field_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn full_partial() -> PartialProfile {
        PartialProfile {
            age: Some(30),
            height_cm: Some(180.0),
            weight_kg: Some(80.0),
            ..Default::default()
        }
    }

    #[rstest]
    #[case(10, true)]
    #[case(120, true)]
    #[case(9, false)]
    #[case(121, false)]
    fn test_validate_age(#[case] age: u32, #[case] ok: bool) {
        assert_eq!(validate_age(age).is_ok(), ok);
    }

    #[rstest]
    #[case(50.0, true)]
    #[case(250.0, true)]
    #[case(130.0, true)] // below slider minimum, still valid
    #[case(49.9, false)]
    #[case(250.1, false)]
    #[case(0.0, false)]
    fn test_validate_height(#[case] height: f64, #[case] ok: bool) {
        assert_eq!(validate_height_cm(height).is_ok(), ok);
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight_kg(10.0).is_ok());
        assert!(validate_weight_kg(227.0).is_ok());
        assert!(validate_weight_kg(-5.0).is_err());
        assert!(validate_weight_kg(227.5).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            validate_age(5).unwrap_err(),
            "Age must be between 10 and 120 years"
        );
        assert_eq!(
            validate_body_fat(50.0).unwrap_err(),
            "Body fat must be between 5 and 45%"
        );
        assert_eq!(
            validate_weight_kg(f64::NAN).unwrap_err(),
            "Weight must be a valid number"
        );
    }

    #[test]
    fn test_empty_profile_is_valid() {
        let result = validate_user_data(&PartialProfile::default(), true);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.field_errors.is_empty());
    }

    #[test]
    fn test_core_field_errors_block() {
        let partial = PartialProfile {
            age: Some(5),
            body_fat_percent: Some(60.0),
            ..full_partial()
        };
        let result = validate_user_data(&partial, false);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.field_errors.contains_key("age"));
        assert!(result.field_errors.contains_key("bodyFat"));
    }

    #[test]
    fn test_measurement_errors_depend_on_flag() {
        let partial = PartialProfile {
            measurements: Some(Measurements {
                waist_cm: Some(10.0),
                hips_cm: Some(95.0),
                neck_cm: Some(70.0),
                shoulder_cm: None,
            }),
            ..full_partial()
        };

        let lenient = validate_user_data(&partial, false);
        assert!(lenient.is_valid);
        assert!(lenient.errors.is_empty());
        assert_eq!(lenient.field_errors.len(), 2);
        assert!(lenient.field_errors.contains_key("waist"));
        assert!(lenient.field_errors.contains_key("neck"));

        let strict = validate_user_data(&partial, true);
        assert!(!strict.is_valid);
        assert_eq!(strict.errors.len(), 2);
        assert_eq!(strict.field_errors, lenient.field_errors);
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("bodyFat"), "Body fat");
        assert_eq!(get_field_display_label("shoulderCm"), "Shoulder width");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 10.0f64..=227.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_above_max(weight in 227.01f64..1000.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        /// Property: is_valid always mirrors an empty error list
        #[test]
        fn prop_is_valid_iff_no_errors(
            age in 0u32..200,
            height in 0.0f64..400.0,
            waist in 0.0f64..300.0,
            optional in any::<bool>()
        ) {
            let partial = PartialProfile {
                age: Some(age),
                height_cm: Some(height),
                measurements: Some(Measurements { waist_cm: Some(waist), ..Default::default() }),
                ..Default::default()
            };
            let result = validate_user_data(&partial, optional);
            prop_assert_eq!(result.is_valid, result.errors.is_empty());
            prop_assert!(result.errors.len() <= result.field_errors.len());
        }
    }
}
