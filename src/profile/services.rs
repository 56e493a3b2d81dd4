use crate::domain::{HeightUnit, Profile};
use crate::engine::{bmi, units};
use crate::error::EngineError;
use crate::profile::dto::UpdateProfileRequest;
use crate::state::AppState;
use crate::store::{load_profile, save_profile, LOGS_KEY, USER_KEY};

pub async fn get_profile(state: &AppState) -> Result<Profile, EngineError> {
    load_profile(state.store.as_ref())
        .await?
        .ok_or(EngineError::NotFound("profile"))
}

/// Merge a partial update into the stored profile.
///
/// Whenever both weight and height are present after the merge, BMI and its
/// category are recomputed in the same write; otherwise both stay absent.
/// They are never editable independently.
pub async fn update_profile(
    state: &AppState,
    req: UpdateProfileRequest,
) -> Result<Profile, EngineError> {
    let _guard = state.write_lock.lock().await;

    let mut profile = load_profile(state.store.as_ref()).await?.unwrap_or_default();

    if let Some(username) = req.username {
        profile.username = username;
    }
    if let Some(email) = req.email {
        profile.email = email;
    }
    if let Some(daily_calories) = req.daily_calories {
        profile.daily_calories = daily_calories;
    }
    if let Some(activity_level) = req.activity_level {
        profile.activity_level = Some(activity_level);
    }
    if let Some(age) = req.age {
        profile.age = Some(age);
    }
    if let Some(weight_unit) = req.weight_unit {
        profile.weight_unit = weight_unit;
    }
    if let Some(weight) = req.weight {
        profile.weight = Some(weight);
    }
    if let Some(height_unit) = req.height_unit {
        profile.height_unit = height_unit;
    }
    if req.feet.is_some() {
        profile.feet = req.feet;
    }
    if req.inches.is_some() {
        profile.inches = req.inches;
    }
    if let Some(height) = req.height {
        profile.height = Some(height);
    }

    // Stored height is always centimeter-equivalent; a feet/inches entry is
    // converted on the way in.
    if profile.height_unit == HeightUnit::Ft {
        if let Some(feet) = profile.feet {
            let inches = profile.inches.unwrap_or(0);
            profile.height = Some(f64::from(units::feet_inches_to_cm(feet, inches)));
        }
    }

    match (profile.weight, profile.height) {
        (Some(_), Some(_)) => {
            let (value, category) =
                bmi::evaluate(profile.weight, profile.height, profile.weight_unit)?;
            profile.bmi = Some(value);
            profile.bmi_category = Some(category);
        }
        _ => {
            profile.bmi = None;
            profile.bmi_category = None;
        }
    }

    save_profile(state.store.as_ref(), &profile).await?;
    Ok(profile)
}

/// Zero the progression fields while keeping identity and measurements,
/// the "start over" action.
pub async fn reset_progress(state: &AppState) -> Result<Profile, EngineError> {
    let _guard = state.write_lock.lock().await;

    let mut profile = load_profile(state.store.as_ref()).await?.unwrap_or_default();
    profile.total_xp = 0;
    profile.current_level = 1;
    profile.badges.clear();
    profile.streak = 0;
    profile.last_healthy_date = None;
    save_profile(state.store.as_ref(), &profile).await?;
    Ok(profile)
}

/// Delete both store documents wholesale.
pub async fn wipe_all(state: &AppState) -> Result<(), EngineError> {
    let _guard = state.write_lock.lock().await;

    state
        .store
        .delete(USER_KEY)
        .await
        .map_err(EngineError::StoreUnavailable)?;
    state
        .store
        .delete(LOGS_KEY)
        .await
        .map_err(EngineError::StoreUnavailable)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Badge, BmiCategory, WeightUnit};

    fn update() -> UpdateProfileRequest {
        UpdateProfileRequest::default()
    }

    #[tokio::test]
    async fn measurements_drive_bmi_in_the_same_write() {
        let state = AppState::fake();
        let profile = update_profile(
            &state,
            UpdateProfileRequest {
                weight: Some(70.0),
                height: Some(175.0),
                ..update()
            },
        )
        .await
        .unwrap();
        assert_eq!(profile.bmi, Some(22.9));
        assert_eq!(profile.bmi_category, Some(BmiCategory::Normal));

        let stored = get_profile(&state).await.unwrap();
        assert_eq!(stored, profile);
    }

    #[tokio::test]
    async fn bmi_stays_absent_until_both_measurements_exist() {
        let state = AppState::fake();
        let profile = update_profile(
            &state,
            UpdateProfileRequest {
                weight: Some(70.0),
                ..update()
            },
        )
        .await
        .unwrap();
        assert_eq!(profile.bmi, None);
        assert_eq!(profile.bmi_category, None);
    }

    #[tokio::test]
    async fn feet_and_inches_store_centimeters() {
        let state = AppState::fake();
        let profile = update_profile(
            &state,
            UpdateProfileRequest {
                weight: Some(70.0),
                height_unit: Some(crate::domain::HeightUnit::Ft),
                feet: Some(5),
                inches: Some(9),
                ..update()
            },
        )
        .await
        .unwrap();
        assert_eq!(profile.height, Some(175.0));
        assert!(profile.bmi.is_some());
    }

    #[tokio::test]
    async fn non_positive_weight_is_rejected() {
        let state = AppState::fake();
        let err = update_profile(
            &state,
            UpdateProfileRequest {
                weight: Some(0.0),
                height: Some(175.0),
                ..update()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidMeasurement));
    }

    #[tokio::test]
    async fn reset_keeps_identity_and_measurements() {
        let state = AppState::fake();
        let mut profile = Profile {
            username: "asha".into(),
            weight: Some(70.0),
            weight_unit: WeightUnit::Kg,
            height: Some(175.0),
            bmi: Some(22.9),
            bmi_category: Some(BmiCategory::Normal),
            total_xp: 340,
            current_level: 4,
            badges: vec![Badge::First50, Badge::Xp200],
            streak: 5,
            last_healthy_date: Some(time::macros::date!(2026 - 03 - 10)),
            ..Profile::default()
        };
        save_profile(state.store.as_ref(), &profile).await.unwrap();

        let reset = reset_progress(&state).await.unwrap();
        profile.total_xp = 0;
        profile.current_level = 1;
        profile.badges.clear();
        profile.streak = 0;
        profile.last_healthy_date = None;
        assert_eq!(reset, profile);
        assert_eq!(reset.username, "asha");
        assert_eq!(reset.bmi, Some(22.9));
    }

    #[tokio::test]
    async fn wipe_removes_both_documents() {
        let state = AppState::fake();
        save_profile(state.store.as_ref(), &Profile::default())
            .await
            .unwrap();
        wipe_all(&state).await.unwrap();
        assert!(matches!(
            get_profile(&state).await.unwrap_err(),
            EngineError::NotFound(_)
        ));
    }
}
