//! Mass and length conversions for the measurement pickers.
//!
//! Rounding is intentionally coarse: the UI steps weight in 0.5 lb / 0.1 kg
//! increments and height in whole centimeters, so conversions snap to those
//! grids rather than carrying full precision.

pub const LB_PER_KG: f64 = 2.20462;

/// Kilograms to pounds, rounded to the nearest 0.5.
pub fn kg_to_lb(kg: f64) -> f64 {
    (kg * LB_PER_KG * 2.0).round() / 2.0
}

/// Pounds to kilograms, rounded to one decimal.
pub fn lb_to_kg(lb: f64) -> f64 {
    (lb / LB_PER_KG * 10.0).round() / 10.0
}

/// Centimeters to whole feet and inches.
///
/// When the inch remainder rounds up to 12 the result carries into the feet
/// component instead of reporting `(feet, 12)`.
pub fn cm_to_feet_inches(cm: f64) -> (u32, u32) {
    let total_inches = cm / 2.54;
    let mut feet = (total_inches / 12.0).floor() as u32;
    let mut inches = (total_inches % 12.0).round() as u32;
    if inches == 12 {
        feet += 1;
        inches = 0;
    }
    (feet, inches)
}

/// Feet and inches to whole centimeters.
pub fn feet_inches_to_cm(feet: u32, inches: u32) -> u32 {
    (f64::from(feet * 12 + inches) * 2.54).round() as u32
}
