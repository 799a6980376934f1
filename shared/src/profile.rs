//! User profile types
//!
//! `UserProfile` is the single input record of the engine. It is built by the
//! presentation layer from form input that has already been converted to
//! metric units.

use crate::errors::ProfileError;
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Biological sex for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {}", s)),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    High,
    /// Very hard exercise or physical job
    VeryHigh,
}

impl ActivityLevel {
    /// Activity multiplier applied to BMR
    ///
    /// Fixed research values, not tunable per caller.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
            ActivityLevel::VeryHigh => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::High => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryHigh => "Very hard exercise or physical job",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "high" => Ok(ActivityLevel::High),
            "very-high" => Ok(ActivityLevel::VeryHigh),
            _ => Err(format!(
                "Invalid activity level. Must be one of: sedentary, light, moderate, high, very-high (got {})",
                s
            )),
        }
    }
}

/// Optional body circumferences, all in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_cm: Option<f64>,
}

/// Complete profile needed to run the calculations (metric units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub sex: Sex,
    /// Display preference only; never affects stored values
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Age in years
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
}

/// Optional numbers only count as supplied when positive; zero means "not entered".
fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

impl UserProfile {
    /// Body fat percentage, if supplied
    pub fn body_fat(&self) -> Option<f64> {
        supplied(self.body_fat_percent)
    }

    pub fn waist_cm(&self) -> Option<f64> {
        supplied(self.measurements.and_then(|m| m.waist_cm))
    }

    pub fn hips_cm(&self) -> Option<f64> {
        supplied(self.measurements.and_then(|m| m.hips_cm))
    }

    pub fn shoulder_cm(&self) -> Option<f64> {
        supplied(self.measurements.and_then(|m| m.shoulder_cm))
    }

    /// Copy of this profile with the weight replaced
    pub fn with_weight(&self, weight_kg: f64) -> Self {
        Self {
            weight_kg,
            ..self.clone()
        }
    }
}

/// Profile as entered so far; every field may still be missing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialProfile {
    pub sex: Option<Sex>,
    pub unit_system: Option<UnitSystem>,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub body_fat_percent: Option<f64>,
    pub measurements: Option<Measurements>,
}

impl TryFrom<PartialProfile> for UserProfile {
    type Error = ProfileError;

    fn try_from(partial: PartialProfile) -> Result<Self, Self::Error> {
        Ok(UserProfile {
            sex: partial.sex.ok_or(ProfileError::MissingField("sex"))?,
            unit_system: partial.unit_system.unwrap_or_default(),
            age: partial.age.ok_or(ProfileError::MissingField("age"))?,
            height_cm: partial.height_cm.ok_or(ProfileError::MissingField("height"))?,
            weight_kg: partial.weight_kg.ok_or(ProfileError::MissingField("weight"))?,
            activity_level: partial
                .activity_level
                .ok_or(ProfileError::MissingField("activityLevel"))?,
            body_fat_percent: partial.body_fat_percent,
            measurements: partial.measurements,
        })
    }
}

impl From<&UserProfile> for PartialProfile {
    fn from(profile: &UserProfile) -> Self {
        Self {
            sex: Some(profile.sex),
            unit_system: Some(profile.unit_system),
            age: Some(profile.age),
            height_cm: Some(profile.height_cm),
            weight_kg: Some(profile.weight_kg),
            activity_level: Some(profile.activity_level),
            body_fat_percent: profile.body_fat_percent,
            measurements: profile.measurements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_partial() -> PartialProfile {
        PartialProfile {
            sex: Some(Sex::Female),
            age: Some(45),
            height_cm: Some(160.0),
            weight_kg: Some(90.0),
            activity_level: Some(ActivityLevel::Sedentary),
            ..Default::default()
        }
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Light.multiplier(), 1.375);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::High.multiplier(), 1.725);
        assert_eq!(ActivityLevel::VeryHigh.multiplier(), 1.9);
    }

    #[test]
    fn test_activity_level_parsing() {
        assert_eq!("very-high".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryHigh);
        assert_eq!("VERY_HIGH".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryHigh);
        assert_eq!("moderate".parse::<ActivityLevel>().unwrap(), ActivityLevel::Moderate);
        assert!("extreme".parse::<ActivityLevel>().is_err());
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
    }

    #[test]
    fn test_partial_to_profile() {
        let profile = UserProfile::try_from(sample_partial()).unwrap();
        assert_eq!(profile.unit_system, UnitSystem::Metric);
        assert_eq!(profile.weight_kg, 90.0);
        assert!(profile.body_fat().is_none());
    }

    #[test]
    fn test_partial_missing_required_field() {
        let partial = PartialProfile {
            height_cm: None,
            ..sample_partial()
        };
        assert_eq!(
            UserProfile::try_from(partial),
            Err(ProfileError::MissingField("height"))
        );
    }

    #[test]
    fn test_zero_counts_as_not_supplied() {
        let mut profile = UserProfile::try_from(sample_partial()).unwrap();
        profile.body_fat_percent = Some(0.0);
        profile.measurements = Some(Measurements {
            waist_cm: Some(80.0),
            hips_cm: Some(0.0),
            ..Default::default()
        });
        assert_eq!(profile.body_fat(), None);
        assert_eq!(profile.waist_cm(), Some(80.0));
        assert_eq!(profile.hips_cm(), None);
    }

    #[test]
    fn test_with_weight_only_changes_weight() {
        let profile = UserProfile::try_from(sample_partial()).unwrap();
        let lighter = profile.with_weight(65.0);
        assert_eq!(lighter.weight_kg, 65.0);
        assert_eq!(lighter.height_cm, profile.height_cm);
        assert_eq!(lighter.age, profile.age);
    }

    #[test]
    fn test_profile_json_shape() {
        let json = r#"{
            "sex": "male",
            "unitSystem": "imperial",
            "age": 30,
            "heightCm": 180.0,
            "weightKg": 80.0,
            "activityLevel": "very-high",
            "measurements": { "waistCm": 85.0 }
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::VeryHigh);
        assert_eq!(profile.unit_system, UnitSystem::Imperial);
        assert_eq!(profile.waist_cm(), Some(85.0));
        assert_eq!(profile.hips_cm(), None);
    }
}
