use std::path::Path;

use anyhow::Context;

use crate::domain::CandidateFood;

/// Static food catalog, loaded once at startup from a JSON file.
pub struct Catalog {
    foods: Vec<CandidateFood>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("read food catalog {}", path.as_ref().display()))?;
        let foods = serde_json::from_str(&raw).context("parse food catalog")?;
        Ok(Self { foods })
    }

    pub fn from_records(foods: Vec<CandidateFood>) -> Self {
        Self { foods }
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Case-insensitive substring search, ranked exact match first, then
    /// prefix match, then arbitrary containment. Ties keep catalog order.
    pub fn search(&self, query: &str) -> Vec<&CandidateFood> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<&CandidateFood> = self
            .foods
            .iter()
            .filter(|f| f.dish.to_lowercase().contains(&term))
            .collect();
        matches.sort_by_key(|f| {
            let dish = f.dish.to_lowercase();
            if dish == term {
                0
            } else if dish.starts_with(&term) {
                1
            } else {
                2
            }
        });
        matches
    }

    /// Exact dish lookup, case-insensitive.
    pub fn get(&self, dish: &str) -> Option<&CandidateFood> {
        self.foods
            .iter()
            .find(|f| f.dish.eq_ignore_ascii_case(dish))
    }
}
