use anyhow::Context;
use async_trait::async_trait;
use base64::Engine as _;
use bytes::Bytes;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::classify::services::{normalize, Classifier};
use crate::classify::{Classification, FoodSuggestion};
use crate::config::GeminiConfig;

const DETECT_PROMPT: &str = r#"Analyze this food image and identify the dish. Return your response as a JSON array of objects with the following format:
[
  {
    "name": "dish name",
    "confidence": 0.95,
    "description": "brief description of the food"
  }
]

Focus on identifying Indian and international dishes. Return up to 3 suggestions ordered by confidence.
If you cannot identify the food clearly, return an empty array."#;

/// Client for the Generative Language API.
pub struct GeminiClassifier {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClassifier {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn generate(&self, parts: serde_json::Value) -> anyhow::Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );
        let body = serde_json::json!({ "contents": [{ "parts": parts }] });
        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("gemini request")?
            .error_for_status()
            .context("gemini status")?;
        let payload: serde_json::Value = resp.json().await.context("gemini body")?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .context("gemini response missing text part")?;
        Ok(text.to_string())
    }
}

#[async_trait]
impl Classifier for GeminiClassifier {
    async fn detect_food(&self, image: Bytes, mime: &str) -> anyhow::Result<Vec<FoodSuggestion>> {
        let data = base64::engine::general_purpose::STANDARD.encode(&image);
        let parts = serde_json::json!([
            { "text": DETECT_PROMPT },
            { "inline_data": { "mime_type": mime, "data": data } }
        ]);
        let text = self.generate(parts).await?;
        debug!(len = text.len(), "gemini detect_food reply");
        let suggestions = extract_json_array(&text)
            .and_then(|json| serde_json::from_str::<Vec<FoodSuggestion>>(&json).ok())
            .unwrap_or_else(|| {
                warn!("could not parse suggestions from model reply");
                Vec::new()
            });
        Ok(normalize(suggestions))
    }

    async fn classify_text(
        &self,
        text: &str,
        prompt: Option<&str>,
    ) -> anyhow::Result<Classification> {
        let classification_prompt = prompt.map(str::to_owned).unwrap_or_else(|| {
            format!(
                r#"Classify the following text and provide a JSON response with:
{{
  "category": "food-related category",
  "confidence": 0.95,
  "description": "brief description of the classification"
}}

Text to classify: "{text}""#
            )
        });
        let reply = self
            .generate(serde_json::json!([{ "text": classification_prompt }]))
            .await?;
        let classification = extract_json_object(&reply)
            .and_then(|json| serde_json::from_str::<Classification>(&json).ok())
            .unwrap_or_else(|| Classification {
                category: "Unknown".into(),
                confidence: 0.5,
                description: reply.chars().take(100).collect::<String>() + "...",
            });
        Ok(classification)
    }
}

// The model wraps its JSON in prose more often than not; pull out the first
// bracketed payload rather than trusting the whole reply to parse.

fn extract_json_array(text: &str) -> Option<String> {
    lazy_static! {
        static ref ARRAY_RE: Regex = Regex::new(r"(?s)\[.*\]").unwrap();
    }
    ARRAY_RE.find(text).map(|m| m.as_str().to_string())
}

fn extract_json_object(text: &str) -> Option<String> {
    lazy_static! {
        static ref OBJECT_RE: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
    }
    OBJECT_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_array_from_prose_reply() {
        let reply = "Sure! Here is what I found:\n[\n {\"name\": \"Masala Dosa\", \"confidence\": 0.92, \"description\": \"crepe\"}\n]\nHope that helps.";
        let json = extract_json_array(reply).unwrap();
        let parsed: Vec<FoodSuggestion> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Masala Dosa");
    }

    #[test]
    fn extracts_object_from_fenced_reply() {
        let reply = "```json\n{\"category\": \"Vegetable\", \"confidence\": 0.9, \"description\": \"leafy\"}\n```";
        let json = extract_json_object(reply).unwrap();
        let parsed: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.category, "Vegetable");
    }

    #[test]
    fn no_payload_yields_none() {
        assert!(extract_json_array("no json here").is_none());
        assert!(extract_json_object("no json here").is_none());
    }
}
