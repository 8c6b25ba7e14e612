//! Data models for the FitPro coaching core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::{DayContent, WeekPlan};
use crate::timeline::Timeline;
use crate::weekday::WeekdayKey;

/// A purchased coaching program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub coach: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub duration_days: u32,
    #[serde(flatten)]
    pub week: WeekPlan<DayPlan>,
}

impl Program {
    pub fn timeline(&self, now: DateTime<Utc>) -> Timeline {
        Timeline::compute(self.start_date, self.duration_days, now)
    }
}

/// Workout and nutrition content for one weekday
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionPlan>,
}

impl DayContent for DayPlan {
    fn is_empty(&self) -> bool {
        self.workout.is_none() && self.nutrition.is_none()
    }
}

/// Workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub title: String,
    pub duration_minutes: u32,
    pub calories: u32,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Daily nutrition targets and meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub calories_target: u32,
    /// Unit-suffixed amount, e.g. "120g"
    pub protein_target: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub title: String,
    pub detail: String,
}

/// What a student's plan covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Workout,
    Nutrition,
    Both,
}

/// Coach review status of a student
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Pending,
    Active,
}

impl StudentStatus {
    pub fn toggled(self) -> Self {
        match self {
            StudentStatus::Pending => StudentStatus::Active,
            StudentStatus::Active => StudentStatus::Pending,
        }
    }
}

/// Coach-authored content for one weekday of a student's plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    #[serde(default)]
    pub workout_steps: Vec<String>,
    #[serde(default)]
    pub nutrition_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_target: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_target: Option<String>,
}

impl DayContent for DayEntry {
    fn is_empty(&self) -> bool {
        self.workout_steps.is_empty()
            && self.nutrition_items.is_empty()
            && self.calories_target.is_none()
            && self.protein_target.is_none()
    }
}

/// A student's weekly plan as edited in the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPlan {
    pub student_id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub plan_title: String,
    pub plan_type: PlanType,
    #[serde(default)]
    pub status: StudentStatus,
    pub selected_day: WeekdayKey,
    #[serde(flatten)]
    pub week: WeekPlan<DayEntry>,
    pub updated_at: DateTime<Utc>,
}
