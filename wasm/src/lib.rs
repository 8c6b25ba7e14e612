//! FitPro WASM Module
//!
//! Browser bindings for the program timeline and day selection, so the
//! client renders the same progress and default day as the API.

use chrono::{DateTime, TimeZone, Utc};
use fitpro_shared::timeline::{self, ProgramStatus, Timeline};
use fitpro_shared::{DayPlan, WeekPlan, WeekdayKey};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Timeline plus the labels a program card shows
#[derive(Debug, Serialize)]
struct TimelineView {
    #[serde(flatten)]
    timeline: Timeline,
    status: ProgramStatus,
    remaining_label: String,
}

/// Compute a program timeline.
///
/// `now_ms` is milliseconds since the Unix epoch, as returned by `Date.now()`.
/// Returns the timeline as JSON.
#[wasm_bindgen]
pub fn compute_timeline(start_iso: &str, duration_days: f64, now_ms: f64) -> Result<String, JsValue> {
    timeline_json(start_iso, duration_days, now_ms).map_err(|e| JsValue::from_str(&e))
}

/// "Course ended", "1 day remaining" or "N days remaining"
#[wasm_bindgen]
pub fn remaining_days_label(remaining_days: u32) -> String {
    timeline::remaining_days_label(remaining_days)
}

/// Display form of a start date; unparseable input renders as a dash
#[wasm_bindgen]
pub fn format_start_date(start_iso: &str) -> String {
    timeline::format_start_date(start_iso)
}

/// Day a program detail view should open on.
///
/// `plan_json` holds `schedule` and `plan_by_day`; `today` is a weekday key
/// such as `"fri"`. Returns `undefined` when no day has a plan.
#[wasm_bindgen]
pub fn default_day(plan_json: &str, today: &str) -> Result<Option<String>, JsValue> {
    default_day_key(plan_json, today).map_err(|e| JsValue::from_str(&e))
}

fn parse_now(now_ms: f64) -> Result<DateTime<Utc>, String> {
    if !now_ms.is_finite() {
        return Err(format!("Invalid timestamp: {}", now_ms));
    }
    Utc.timestamp_millis_opt(now_ms as i64)
        .single()
        .ok_or_else(|| format!("Invalid timestamp: {}", now_ms))
}

fn timeline_json(start_iso: &str, duration_days: f64, now_ms: f64) -> Result<String, String> {
    let now = parse_now(now_ms)?;
    let timeline = Timeline::from_input(start_iso, duration_days, now).map_err(|e| e.to_string())?;

    let view = TimelineView {
        timeline,
        status: timeline.status(),
        remaining_label: timeline.remaining_label(),
    };
    serde_json::to_string(&view).map_err(|e| e.to_string())
}

fn default_day_key(plan_json: &str, today: &str) -> Result<Option<String>, String> {
    let week: WeekPlan<DayPlan> = serde_json::from_str(plan_json).map_err(|e| e.to_string())?;
    let today: WeekdayKey = today.parse().map_err(|e: fitpro_shared::ScheduleError| e.to_string())?;

    Ok(week.default_day(today).map(|day| day.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    // 2026-02-06T10:00:00Z
    const FEB_6_MS: f64 = 1_770_372_000_000.0;

    #[test]
    fn test_timeline_json() {
        let json = timeline_json("2026-02-01T10:00:00.000Z", 28.0, FEB_6_MS).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["passed_days"], 5);
        assert_eq!(value["remaining_days"], 23);
        assert_eq!(value["percent"], 18);
        assert_eq!(value["is_active"], true);
        assert_eq!(value["status"], "active");
        assert_eq!(value["remaining_label"], "23 days remaining");
    }

    #[test]
    fn test_timeline_json_rejects_bad_input() {
        assert!(timeline_json("not a date", 28.0, FEB_6_MS).is_err());
        assert!(timeline_json("2026-02-01", -1.0, FEB_6_MS).is_err());
        assert!(timeline_json("2026-02-01", 28.0, f64::NAN).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(remaining_days_label(0), "Course ended");
        assert_eq!(remaining_days_label(1), "1 day remaining");
        assert_eq!(format_start_date("2026-02-01T10:00:00Z"), "1 February 2026");
    }

    #[test]
    fn test_default_day_key() {
        let plan = r#"{
            "schedule": { "weekly": ["sat", "sun", "tue", "wed"], "rest_days": ["mon", "thu", "fri"] },
            "plan_by_day": {
                "sat": { "workout": { "title": "HIIT + Core", "duration_minutes": 35, "calories": 420 } },
                "tue": { "nutrition": { "calories_target": 1750, "protein_target": "115g" } }
            }
        }"#;

        assert_eq!(default_day_key(plan, "fri").unwrap(), Some("sat".to_string()));
        assert_eq!(default_day_key(plan, "tue").unwrap(), Some("tue".to_string()));
        // Sunday has no content in this plan
        assert_eq!(default_day_key(plan, "sun").unwrap(), Some("sat".to_string()));
        assert!(default_day_key(plan, "someday").is_err());
        assert_eq!(default_day_key("{}", "sat").unwrap(), None);
    }
}
