//! Program storage
//!
//! Programs are whole documents: the schedule and per-day plans are always
//! read and written together, so both implementations store one record per
//! program.

use anyhow::Result;
use async_trait::async_trait;
use fitpro_shared::Program;
use sqlx::types::Json;
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Repository of coaching programs
#[async_trait]
pub trait ProgramStore: Send + Sync {
    async fn load(&self, id: Uuid) -> Result<Option<Program>>;

    /// Insert or replace a program
    async fn save(&self, program: &Program) -> Result<()>;

    async fn list(&self) -> Result<Vec<Program>>;

    /// Returns false when no program had that id
    async fn delete(&self, id: Uuid) -> Result<bool>;

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Process-local program store
#[derive(Default)]
pub struct InMemoryProgramStore {
    programs: RwLock<HashMap<Uuid, Program>>,
}

impl InMemoryProgramStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_programs(programs: impl IntoIterator<Item = Program>) -> Self {
        Self {
            programs: RwLock::new(programs.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

#[async_trait]
impl ProgramStore for InMemoryProgramStore {
    async fn load(&self, id: Uuid) -> Result<Option<Program>> {
        Ok(self.programs.read().await.get(&id).cloned())
    }

    async fn save(&self, program: &Program) -> Result<()> {
        self.programs
            .write()
            .await
            .insert(program.id, program.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Program>> {
        Ok(self.programs.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.programs.write().await.remove(&id).is_some())
    }
}

// ============================================================================
// PostgreSQL
// ============================================================================

/// Program store backed by a JSONB column
#[derive(Clone)]
pub struct PgProgramStore {
    pool: PgPool,
}

impl PgProgramStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgramStore for PgProgramStore {
    async fn load(&self, id: Uuid) -> Result<Option<Program>> {
        let row = sqlx::query_as::<_, (Json<Program>,)>(
            r#"SELECT record FROM programs WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(Json(program),)| program))
    }

    async fn save(&self, program: &Program) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO programs (id, record, start_date)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                record = EXCLUDED.record,
                start_date = EXCLUDED.start_date,
                updated_at = NOW()
            "#,
        )
        .bind(program.id)
        .bind(Json(program))
        .bind(program.start_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Program>> {
        let rows = sqlx::query_as::<_, (Json<Program>,)>(
            r#"SELECT record FROM programs ORDER BY start_date DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(Json(program),)| program).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM programs WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        crate::db::health_check(&self.pool).await
    }
}
