//! Input validation functions
//!
//! This module provides validation utilities for program and student plan
//! input. Field-level length and range rules live on the request types as
//! `validator` derives; the rules here cover formats and nested content.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::models::{DayEntry, DayPlan, NutritionPlan, WorkoutPlan};

static PROTEIN_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,4}(\.\d{1,2})?\s?g$").expect("protein target pattern"));

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{10,13}$").expect("phone pattern"));

/// Longest accepted workout step, meal line or nutrition item
const MAX_ITEM_LEN: usize = 200;

/// Validate a unit-suffixed protein target such as "120g"
pub fn validate_protein_target(target: &str) -> Result<(), String> {
    if !PROTEIN_TARGET.is_match(target.trim()) {
        return Err(format!(
            "Protein target must be grams with a 'g' suffix, e.g. 120g (got '{target}')"
        ));
    }
    Ok(())
}

/// Validate a daily calorie target
pub fn validate_calories_target(calories: u32) -> Result<(), String> {
    if calories > 20000 {
        return Err("Calorie target unreasonably high".to_string());
    }
    Ok(())
}

/// Validate workout length in minutes
pub fn validate_workout_minutes(minutes: u32) -> Result<(), String> {
    if minutes > 1440 {
        // 24 hours
        return Err("Workout duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate a required free-text field, ignoring surrounding whitespace
pub fn validate_not_blank(value: &str, what: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{what} cannot be blank"));
    }
    Ok(())
}

/// Validate a phone number (digits with optional leading '+')
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if !PHONE.is_match(phone.trim()) {
        return Err("Invalid phone number".to_string());
    }
    Ok(())
}

/// Validate a list of free-text lines (steps, meals, items)
pub fn validate_items(items: &[String], what: &str) -> Result<(), String> {
    if let Some(item) = items.iter().find(|item| item.len() > MAX_ITEM_LEN) {
        return Err(format!(
            "{what} entries must be at most {MAX_ITEM_LEN} characters ('{}...')",
            item.chars().take(20).collect::<String>()
        ));
    }
    Ok(())
}

pub fn validate_workout(workout: &WorkoutPlan) -> Result<(), String> {
    if workout.title.trim().is_empty() {
        return Err("Workout title cannot be empty".to_string());
    }
    validate_workout_minutes(workout.duration_minutes)?;
    validate_items(&workout.steps, "Workout step")
}

pub fn validate_nutrition(nutrition: &NutritionPlan) -> Result<(), String> {
    validate_calories_target(nutrition.calories_target)?;
    validate_protein_target(&nutrition.protein_target)?;
    if let Some(meal) = nutrition
        .meals
        .iter()
        .find(|meal| meal.title.len() > MAX_ITEM_LEN || meal.detail.len() > MAX_ITEM_LEN)
    {
        return Err(format!("Meal '{}' is too long", meal.title));
    }
    Ok(())
}

/// Validate a program's content for one day
pub fn validate_day_plan(plan: &DayPlan) -> Result<(), String> {
    if let Some(workout) = &plan.workout {
        validate_workout(workout)?;
    }
    if let Some(nutrition) = &plan.nutrition {
        validate_nutrition(nutrition)?;
    }
    Ok(())
}

/// Validate a student plan's content for one day
pub fn validate_day_entry(entry: &DayEntry) -> Result<(), String> {
    validate_items(&entry.workout_steps, "Workout step")?;
    validate_items(&entry.nutrition_items, "Nutrition item")?;
    if let Some(calories) = entry.calories_target {
        validate_calories_target(calories)?;
    }
    if let Some(protein) = &entry.protein_target {
        validate_protein_target(protein)?;
    }
    Ok(())
}
