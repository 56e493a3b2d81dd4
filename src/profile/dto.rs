use serde::Deserialize;

use crate::domain::{HeightUnit, WeightUnit};

/// Partial profile update: only supplied fields change. Measurements are
/// re-derived (feet/inches to cm, BMI and category) in the same write.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub daily_calories: Option<u32>,
    pub activity_level: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
    pub height: Option<f64>,
    pub height_unit: Option<HeightUnit>,
    pub feet: Option<u32>,
    pub inches: Option<u32>,
}
