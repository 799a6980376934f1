//! Unit conversion and display module
//!
//! All profile data is stored in metric units internally (kg, cm). Imperial
//! values only exist at the input/output boundary.
//!
//! # Design Principles
//!
//! 1. **Internal Consistency**: Calculations only ever see kg and cm
//! 2. **No Hidden Rounding**: Conversions are exact; rounding is a display concern
//! 3. **Identity Short-Circuit**: Converting a value to its own unit returns it untouched

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds in one kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Centimeters in one inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Convert centimeters to total inches
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Convert total inches to centimeters
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => lbs_to_kg(value),
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg_to_lbs(kg),
        }
    }

    /// Convert a value between two weight units
    pub fn convert(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
        if from == to {
            return value;
        }
        to.from_kg(from.to_kg(value))
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Height/circumference unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inches => inches_to_cm(value),
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Inches => cm_to_inches(cm),
        }
    }

    /// Convert a value between two length units
    pub fn convert(value: f64, from: HeightUnit, to: HeightUnit) -> f64 {
        if from == to {
            return value;
        }
        to.from_cm(from.to_cm(value))
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

// ============================================================================
// Unit System
// ============================================================================

/// Display unit system chosen by the user
///
/// Presentation only: stored profile values are always metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            UnitSystem::Metric => WeightUnit::Kg,
            UnitSystem::Imperial => WeightUnit::Lbs,
        }
    }

    pub fn height_unit(&self) -> HeightUnit {
        match self {
            UnitSystem::Metric => HeightUnit::Cm,
            UnitSystem::Imperial => HeightUnit::Inches,
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

// ============================================================================
// Display Helpers
// ============================================================================

/// Height in feet and inches for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: i32,
    pub inches: f64,
}

impl FeetInches {
    /// Split total inches into whole feet and rounded remaining inches
    ///
    /// Rounding happens before the split so 11.5" and above carries into feet.
    pub fn from_total_inches(total_inches: f64) -> Self {
        let rounded = total_inches.round();
        let feet = (rounded / 12.0).floor() as i32;
        let inches = rounded % 12.0;
        Self { feet, inches }
    }

    pub fn to_total_inches(&self) -> f64 {
        (self.feet as f64 * 12.0) + self.inches
    }

    pub fn from_cm(cm: f64) -> Self {
        Self::from_total_inches(cm_to_inches(cm))
    }

    pub fn to_cm(&self) -> f64 {
        inches_to_cm(self.to_total_inches())
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}

/// Format a stored weight for the user's unit system, one decimal place
pub fn format_weight(weight_kg: f64, system: UnitSystem) -> String {
    let unit = system.weight_unit();
    format!("{:.1} {}", unit.from_kg(weight_kg), unit)
}

/// Format a stored height for the user's unit system
pub fn format_height(height_cm: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => format!("{:.0} cm", height_cm),
        UnitSystem::Imperial => FeetInches::from_cm(height_cm).to_string(),
    }
}
