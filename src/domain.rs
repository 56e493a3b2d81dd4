use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Ft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// One-way unlockable achievements. Order here matches the evaluation
/// order in `engine::progression`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "first_50")]
    First50,
    #[serde(rename = "xp_200")]
    Xp200,
    #[serde(rename = "xp_500")]
    Xp500,
    #[serde(rename = "streak_7")]
    Streak7,
}

/// The single user profile document, stored wholesale under the `user` key.
///
/// `current_level`, `bmi` and `bmi_category` are derived fields: every write
/// path recomputes them from `total_xp` and the raw measurements, so a
/// persisted profile is always internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub daily_calories: u32,
    pub activity_level: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub weight_unit: WeightUnit,
    /// Always centimeter-equivalent, regardless of the display unit.
    pub height: Option<f64>,
    pub height_unit: HeightUnit,
    pub feet: Option<u32>,
    pub inches: Option<u32>,
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub total_xp: u32,
    pub current_level: u32,
    pub badges: Vec<Badge>,
    pub streak: u32,
    #[serde(with = "iso_date::option")]
    pub last_healthy_date: Option<Date>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            daily_calories: 2200,
            activity_level: None,
            age: None,
            weight: None,
            weight_unit: WeightUnit::Kg,
            height: None,
            height_unit: HeightUnit::Cm,
            feet: None,
            inches: None,
            bmi: None,
            bmi_category: None,
            total_xp: 0,
            current_level: 1,
            badges: Vec::new(),
            streak: 0,
            last_healthy_date: None,
        }
    }
}

/// An immutable meal-log entry, appended to the `logs` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub dish: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub health_score: i64,
    pub xp: u32,
}

/// Nutrition facts for a dish about to be logged, either looked up in the
/// catalog or derived from an AI suggestion by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFood {
    pub dish: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub health_score: i64,
}

/// Summary totals over a set of log records.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_xp: u64,
    pub meal_count: usize,
    pub average_health_score: f64,
    pub distinct_active_days: usize,
}
