use std::collections::HashMap;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::sync::RwLock;

use crate::domain::{LogRecord, Profile};
use crate::error::EngineError;

pub const USER_KEY: &str = "user";
pub const LOGS_KEY: &str = "logs";

/// The external key-value store: whole JSON documents under logical keys.
/// Injected into the services so tests run against [`MemoryStore`].
#[async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<serde_json::Value>>;
    async fn put(&self, key: &str, doc: serde_json::Value) -> anyhow::Result<()>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}

/// Postgres-backed store: one `documents` row per logical key, JSONB body.
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("connect to database")?;
        Ok(Self { db })
    }

    pub fn pool(&self) -> &PgPool {
        &self.db
    }
}

#[async_trait]
impl Store for PgStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<serde_json::Value>> {
        let doc = sqlx::query_scalar::<_, serde_json::Value>(
            r#"
            SELECT doc
            FROM documents
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.db)
        .await
        .context("store get")?;
        Ok(doc)
    }

    async fn put(&self, key: &str, doc: serde_json::Value) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (key, doc)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE
            SET doc = EXCLUDED.doc, updated_at = now()
            "#,
        )
        .bind(key)
        .bind(doc)
        .execute(&self.db)
        .await
        .context("store put")?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM documents
            WHERE key = $1
            "#,
        )
        .bind(key)
        .execute(&self.db)
        .await
        .context("store delete")?;
        Ok(())
    }
}

/// In-memory store for unit tests and `AppState::fake()`.
#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<String, serde_json::Value>>,
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<serde_json::Value>> {
        Ok(self.docs.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, doc: serde_json::Value) -> anyhow::Result<()> {
        self.docs.write().await.insert(key.to_string(), doc);
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.docs.write().await.remove(key);
        Ok(())
    }
}

// Typed accessors over the two logical documents. Store failures surface as
// `StoreUnavailable`: state was not durably updated and the caller decides
// whether to retry.

pub async fn load_profile(store: &dyn Store) -> Result<Option<Profile>, EngineError> {
    let doc = store
        .get(USER_KEY)
        .await
        .map_err(EngineError::StoreUnavailable)?;
    doc.map(serde_json::from_value)
        .transpose()
        .map_err(|e| EngineError::StoreUnavailable(e.into()))
}

pub async fn save_profile(store: &dyn Store, profile: &Profile) -> Result<(), EngineError> {
    let doc = serde_json::to_value(profile).map_err(|e| EngineError::StoreUnavailable(e.into()))?;
    store
        .put(USER_KEY, doc)
        .await
        .map_err(EngineError::StoreUnavailable)
}

pub async fn load_logs(store: &dyn Store) -> Result<Vec<LogRecord>, EngineError> {
    let doc = store
        .get(LOGS_KEY)
        .await
        .map_err(EngineError::StoreUnavailable)?;
    match doc {
        Some(doc) => serde_json::from_value(doc).map_err(|e| EngineError::StoreUnavailable(e.into())),
        None => Ok(Vec::new()),
    }
}

pub async fn save_logs(store: &dyn Store, logs: &[LogRecord]) -> Result<(), EngineError> {
    let doc = serde_json::to_value(logs).map_err(|e| EngineError::StoreUnavailable(e.into()))?;
    store
        .put(LOGS_KEY, doc)
        .await
        .map_err(EngineError::StoreUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    #[tokio::test]
    async fn memory_store_round_trips_documents() {
        let store = MemoryStore::default();
        assert!(store.get("user").await.unwrap().is_none());

        store
            .put("user", serde_json::json!({"username": "asha"}))
            .await
            .unwrap();
        let doc = store.get("user").await.unwrap().unwrap();
        assert_eq!(doc["username"], "asha");

        store.delete("user").await.unwrap();
        assert!(store.get("user").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn typed_profile_accessors() {
        let store = MemoryStore::default();
        assert!(load_profile(&store).await.unwrap().is_none());

        let mut profile = Profile::default();
        profile.username = "asha".into();
        profile.total_xp = 120;
        profile.current_level = 2;
        save_profile(&store, &profile).await.unwrap();

        let loaded = load_profile(&store).await.unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn missing_logs_document_reads_as_empty() {
        let store = MemoryStore::default();
        assert!(load_logs(&store).await.unwrap().is_empty());

        let logs = vec![LogRecord {
            id: Uuid::new_v4(),
            timestamp: datetime!(2026-03-10 12:00 UTC),
            dish: "Idli".into(),
            calories: 120.0,
            protein: 4.0,
            carbs: 25.0,
            fat: 1.0,
            health_score: 75,
            xp: 38,
        }];
        save_logs(&store, &logs).await.unwrap();
        assert_eq!(load_logs(&store).await.unwrap(), logs);
    }
}
