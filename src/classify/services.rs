use async_trait::async_trait;
use bytes::Bytes;

use crate::classify::{Classification, FoodSuggestion};

/// External classification collaborator. The engine only ever consumes its
/// output as candidate nutrition entries; swapping the backing model is a
/// matter of providing another implementation.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Identify dishes in an image, up to three suggestions by confidence.
    async fn detect_food(&self, image: Bytes, mime: &str) -> anyhow::Result<Vec<FoodSuggestion>>;

    /// Classify free text into a food-related category.
    async fn classify_text(
        &self,
        text: &str,
        prompt: Option<&str>,
    ) -> anyhow::Result<Classification>;
}

/// Clamp confidences into [0, 1] and cap the list at three entries,
/// whatever the model returned.
pub fn normalize(suggestions: Vec<FoodSuggestion>) -> Vec<FoodSuggestion> {
    suggestions
        .into_iter()
        .take(3)
        .map(|mut s| {
            s.confidence = s.confidence.clamp(0.0, 1.0);
            if s.name.is_empty() {
                s.name = "Unknown Food".into();
            }
            s
        })
        .collect()
}

/// Canned suggestions served when the upstream model is unreachable.
pub fn fallback_suggestions() -> Vec<FoodSuggestion> {
    [
        ("Mixed Salad", 0.6),
        ("Sandwich", 0.5),
        ("Pasta", 0.4),
    ]
    .into_iter()
    .map(|(name, confidence)| FoodSuggestion {
        name: name.into(),
        confidence,
        description: "AI fallback suggestion".into(),
        estimated_calories: None,
        estimated_protein: None,
        estimated_carbs: None,
        estimated_fat: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(name: &str, confidence: f64) -> FoodSuggestion {
        FoodSuggestion {
            name: name.into(),
            confidence,
            description: String::new(),
            estimated_calories: None,
            estimated_protein: None,
            estimated_carbs: None,
            estimated_fat: None,
        }
    }

    #[test]
    fn normalize_clamps_and_caps() {
        let out = normalize(vec![
            suggestion("Dosa", 1.4),
            suggestion("", -0.2),
            suggestion("Upma", 0.7),
            suggestion("Poha", 0.6),
        ]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].confidence, 1.0);
        assert_eq!(out[1].confidence, 0.0);
        assert_eq!(out[1].name, "Unknown Food");
    }

    #[test]
    fn fallback_is_ordered_by_confidence() {
        let out = fallback_suggestions();
        assert_eq!(out.len(), 3);
        assert!(out.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }
}
