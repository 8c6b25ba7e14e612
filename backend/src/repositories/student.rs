//! Student plan storage
//!
//! Replaces the per-browser plan blob of the admin panel with a repository
//! keyed by student id.

use anyhow::Result;
use async_trait::async_trait;
use fitpro_shared::StudentPlan;
use sqlx::types::Json;
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Repository of per-student weekly plans
#[async_trait]
pub trait StudentPlanStore: Send + Sync {
    async fn load(&self, student_id: Uuid) -> Result<Option<StudentPlan>>;

    /// Insert or replace a plan
    async fn save(&self, plan: &StudentPlan) -> Result<()>;

    async fn list(&self) -> Result<Vec<StudentPlan>>;

    async fn delete(&self, student_id: Uuid) -> Result<bool>;

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// Process-local student plan store
#[derive(Default)]
pub struct InMemoryStudentPlanStore {
    plans: RwLock<HashMap<Uuid, StudentPlan>>,
}

impl InMemoryStudentPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plans(plans: impl IntoIterator<Item = StudentPlan>) -> Self {
        Self {
            plans: RwLock::new(plans.into_iter().map(|p| (p.student_id, p)).collect()),
        }
    }
}

#[async_trait]
impl StudentPlanStore for InMemoryStudentPlanStore {
    async fn load(&self, student_id: Uuid) -> Result<Option<StudentPlan>> {
        Ok(self.plans.read().await.get(&student_id).cloned())
    }

    async fn save(&self, plan: &StudentPlan) -> Result<()> {
        self.plans
            .write()
            .await
            .insert(plan.student_id, plan.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StudentPlan>> {
        Ok(self.plans.read().await.values().cloned().collect())
    }

    async fn delete(&self, student_id: Uuid) -> Result<bool> {
        Ok(self.plans.write().await.remove(&student_id).is_some())
    }
}

/// Student plan store backed by a JSONB column
#[derive(Clone)]
pub struct PgStudentPlanStore {
    pool: PgPool,
}

impl PgStudentPlanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentPlanStore for PgStudentPlanStore {
    async fn load(&self, student_id: Uuid) -> Result<Option<StudentPlan>> {
        let row = sqlx::query_as::<_, (Json<StudentPlan>,)>(
            r#"SELECT record FROM student_plans WHERE student_id = $1"#,
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(Json(plan),)| plan))
    }

    async fn save(&self, plan: &StudentPlan) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO student_plans (student_id, record, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (student_id) DO UPDATE SET
                record = EXCLUDED.record,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(plan.student_id)
        .bind(Json(plan))
        .bind(plan.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<StudentPlan>> {
        let rows = sqlx::query_as::<_, (Json<StudentPlan>,)>(
            r#"SELECT record FROM student_plans ORDER BY updated_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(Json(plan),)| plan).collect())
    }

    async fn delete(&self, student_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM student_plans WHERE student_id = $1"#)
            .bind(student_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        crate::db::health_check(&self.pool).await
    }
}
