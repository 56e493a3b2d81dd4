use serde::{Deserialize, Serialize};

/// A candidate dish from the vision model. Confidence is display-only and
/// never feeds XP or health-score math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSuggestion {
    pub name: String,
    pub confidence: f64,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_carbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_fat: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    pub confidence: f64,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyTextRequest {
    pub text: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyTextResponse {
    pub success: bool,
    pub classification: Option<Classification>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DetectFoodResponse {
    pub success: bool,
    pub suggestions: Vec<FoodSuggestion>,
    pub message: String,
}
