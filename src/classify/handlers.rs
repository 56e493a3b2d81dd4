use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use tracing::{error, instrument};

use crate::classify::dto::{ClassifyTextRequest, ClassifyTextResponse, DetectFoodResponse};
use crate::classify::services::fallback_suggestions;
use crate::state::AppState;

pub fn classify_routes() -> Router<AppState> {
    Router::new()
        .route("/classify/image", post(detect_food))
        .route("/classify/text", post(classify_text))
}

/// POST /classify/image (multipart, field `image`)
///
/// Upstream failures degrade to the canned fallback suggestions with
/// `success: false`, the same contract the web client already handles.
#[instrument(skip(state, mp))]
pub async fn detect_food(
    State(state): State<AppState>,
    mut mp: Multipart,
) -> Result<Json<DetectFoodResponse>, (StatusCode, String)> {
    let mut image: Option<(Bytes, String)> = None;
    while let Ok(Some(field)) = mp.next_field().await {
        if field.name() == Some("image") {
            let mime = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
            image = Some((data, mime));
        }
    }
    let Some((data, mime)) = image else {
        return Err((StatusCode::BAD_REQUEST, "No image file provided".into()));
    };

    match state.classifier.detect_food(data, &mime).await {
        Ok(suggestions) => {
            let message = if suggestions.is_empty() {
                "No food items detected"
            } else {
                "Food detected successfully"
            };
            Ok(Json(DetectFoodResponse {
                success: true,
                suggestions,
                message: message.into(),
            }))
        }
        Err(e) => {
            error!(error = %e, "food detection failed");
            Ok(Json(DetectFoodResponse {
                success: false,
                suggestions: fallback_suggestions(),
                message: "AI service temporarily unavailable".into(),
            }))
        }
    }
}

/// POST /classify/text
#[instrument(skip(state, body))]
pub async fn classify_text(
    State(state): State<AppState>,
    Json(body): Json<ClassifyTextRequest>,
) -> Result<Json<ClassifyTextResponse>, (StatusCode, String)> {
    if body.text.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "No text provided".into()));
    }

    match state
        .classifier
        .classify_text(&body.text, body.prompt.as_deref())
        .await
    {
        Ok(classification) => Ok(Json(ClassifyTextResponse {
            success: true,
            classification: Some(classification),
            message: "Text classified successfully".into(),
        })),
        Err(e) => {
            error!(error = %e, "text classification failed");
            Ok(Json(ClassifyTextResponse {
                success: false,
                classification: None,
                message: "AI service temporarily unavailable".into(),
            }))
        }
    }
}
