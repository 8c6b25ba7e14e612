//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Stores and the clock are trait objects so the same router runs against
//! PostgreSQL in production and in-memory stores with a fixed clock in tests.

use crate::config::AppConfig;
use crate::repositories::{
    InMemoryProgramStore, InMemoryStudentPlanStore, ProgramStore, StudentPlanStore,
};
use chrono::{DateTime, Utc};
use fitpro_shared::{Clock, SystemClock, WeekdayKey};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// All fields are Arc'd or Clone-cheap, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    pub programs: Arc<dyn ProgramStore>,
    pub students: Arc<dyn StudentPlanStore>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<AppConfig>,
    /// Renders `/metrics`; absent when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        programs: Arc<dyn ProgramStore>,
        students: Arc<dyn StudentPlanStore>,
        clock: Arc<dyn Clock>,
        config: AppConfig,
    ) -> Self {
        Self {
            programs,
            students,
            clock,
            config: Arc::new(config),
            metrics: None,
        }
    }

    /// Empty in-memory stores on the system clock
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            Arc::new(InMemoryProgramStore::new()),
            Arc::new(InMemoryStudentPlanStore::new()),
            Arc::new(SystemClock),
            config,
        )
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    #[inline]
    pub fn programs(&self) -> &dyn ProgramStore {
        self.programs.as_ref()
    }

    #[inline]
    pub fn students(&self) -> &dyn StudentPlanStore {
        self.students.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current instant according to the injected clock
    #[inline]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Today's weekday in the configured local offset
    pub fn today(&self) -> WeekdayKey {
        WeekdayKey::of_instant(self.now(), self.config.schedule.utc_offset())
    }
}
