//! Body Metrics Shared Library
//!
//! Pure, deterministic health calculations for a single user profile: BMR,
//! TDEE, BMI, waist-to-hip ratio, target weight ranges, safety-guarded calorie
//! targets and protein recommendations. Used by the WASM bindings and any
//! native caller.

pub mod calculator;
pub mod errors;
pub mod health_metrics;
pub mod nutrition;
pub mod profile;
pub mod safety;
#[cfg(feature = "settings")]
pub mod settings;
pub mod units;
pub mod validation;
pub mod weight_ranges;

// Re-export commonly used items
pub use calculator::*;
pub use errors::*;
pub use health_metrics::*;
pub use nutrition::*;
pub use profile::*;
pub use units::*;
pub use validation::*;
pub use weight_ranges::*;

#[cfg(feature = "settings")]
pub use settings::CalculatorSettings;
