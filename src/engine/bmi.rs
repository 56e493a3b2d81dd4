use crate::domain::{BmiCategory, WeightUnit};
use crate::engine::units::LB_PER_KG;
use crate::error::EngineError;

/// BMI from raw measurements, rounded to one decimal (half-up).
///
/// Stored height is always centimeter-equivalent, even when the profile
/// displays feet/inches, so only the weight needs unit normalization.
pub fn compute_bmi(
    weight: f64,
    height_cm: f64,
    weight_unit: WeightUnit,
) -> Result<f64, EngineError> {
    if weight <= 0.0 || height_cm <= 0.0 {
        return Err(EngineError::InvalidMeasurement);
    }
    let weight_kg = match weight_unit {
        WeightUnit::Kg => weight,
        WeightUnit::Lb => weight / LB_PER_KG,
    };
    let height_m = height_cm / 100.0;
    Ok(round_half_up_1dp(weight_kg / (height_m * height_m)))
}

/// WHO category boundaries, inclusive on the low end.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute BMI plus its category from optional measurements, failing when
/// either is absent or non-positive.
pub fn evaluate(
    weight: Option<f64>,
    height_cm: Option<f64>,
    weight_unit: WeightUnit,
) -> Result<(f64, BmiCategory), EngineError> {
    let (weight, height_cm) = match (weight, height_cm) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(EngineError::InvalidMeasurement),
    };
    let bmi = compute_bmi(weight, height_cm, weight_unit)?;
    Ok((bmi, classify(bmi)))
}

fn round_half_up_1dp(x: f64) -> f64 {
    (x * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_bmi() {
        assert_eq!(compute_bmi(70.0, 175.0, WeightUnit::Kg).unwrap(), 22.9);
        assert_eq!(classify(22.9), BmiCategory::Normal);
    }

    #[test]
    fn pounds_are_normalized() {
        // 154.5 lb ~ 70.08 kg over 175 cm
        assert_eq!(compute_bmi(154.5, 175.0, WeightUnit::Lb).unwrap(), 22.9);
    }

    #[test]
    fn category_boundaries_are_inclusive_low() {
        assert_eq!(classify(18.4), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(24.9), BmiCategory::Normal);
        assert_eq!(classify(25.0), BmiCategory::Overweight);
        assert_eq!(classify(29.9), BmiCategory::Overweight);
        assert_eq!(classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn rejects_non_positive_measurements() {
        assert!(compute_bmi(0.0, 175.0, WeightUnit::Kg).is_err());
        assert!(compute_bmi(70.0, -1.0, WeightUnit::Kg).is_err());
    }

    #[test]
    fn evaluate_requires_both_measurements() {
        assert!(evaluate(Some(70.0), None, WeightUnit::Kg).is_err());
        assert!(evaluate(None, Some(175.0), WeightUnit::Kg).is_err());
        let (bmi, cat) = evaluate(Some(70.0), Some(175.0), WeightUnit::Kg).unwrap();
        assert_eq!(bmi, 22.9);
        assert_eq!(cat, BmiCategory::Normal);
    }
}
