//! Integration tests for program endpoints

mod common;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use fitpro_backend::seed::{FAT_BURN_ID, HYPERTROPHY_ID, NUTRITION_ID};
use serde_json::{json, Value};

fn program_path(id: impl std::fmt::Display) -> String {
    format!("/api/v1/programs/{}", id)
}

#[tokio::test]
async fn test_list_programs() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get_json("/api/v1/programs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["per_page"], 6);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["data"][0]["id"], NUTRITION_ID.to_string());
    assert_eq!(body["data"][2]["id"], HYPERTROPHY_ID.to_string());
}

#[tokio::test]
async fn test_list_programs_pagination_clamps_page() {
    let app = common::TestApp::new().await;

    let (_, body) = app.get_json("/api/v1/programs?per_page=2&page=2").await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = app.get_json("/api/v1/programs?per_page=2&page=9").await;
    assert_eq!(body["page"], 2);
}

#[tokio::test]
async fn test_list_programs_filter() {
    // 2026-02-02: fat burn and hypertrophy are running, nutrition starts tomorrow
    let app = common::TestApp::at(Utc.with_ymd_and_hms(2026, 2, 2, 12, 0, 0).unwrap()).await;

    let (_, body) = app.get_json("/api/v1/programs?filter=active").await;
    assert_eq!(body["total"], 2);

    let (_, body) = app.get_json("/api/v1/programs?filter=inactive").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["status"], "not_started");
    assert_eq!(body["data"][0]["timeline"]["percent"], 0);
}

#[tokio::test]
async fn test_program_detail_on_rest_day() {
    // Friday is a rest day, so the detail opens on Saturday
    let app = common::TestApp::new().await;

    let (status, body) = app.get_json(&program_path(FAT_BURN_ID)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["today"], "fri");
    assert_eq!(body["default_day"], "sat");
    assert_eq!(body["status"], "active");
    assert_eq!(body["start_date_label"], "1 February 2026");
    assert_eq!(body["remaining_label"], "23 days remaining");
    assert_eq!(body["timeline"]["passed_days"], 5);
    assert_eq!(body["timeline"]["remaining_days"], 23);
    assert_eq!(body["timeline"]["percent"], 18);

    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[6]["day"], "fri");
    assert_eq!(days[6]["cell"], "rest");
    assert_eq!(days[6]["selectable"], false);
}

#[tokio::test]
async fn test_program_detail_opens_on_today() {
    // Tuesday has a nutrition-only plan
    let app = common::TestApp::at(Utc.with_ymd_and_hms(2026, 2, 10, 8, 0, 0).unwrap()).await;

    let (_, body) = app.get_json(&program_path(FAT_BURN_ID)).await;

    assert_eq!(body["today"], "tue");
    assert_eq!(body["default_day"], "tue");
}

#[tokio::test]
async fn test_expired_program() {
    let app = common::TestApp::at(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()).await;

    let (_, body) = app.get_json(&program_path(FAT_BURN_ID)).await;

    assert_eq!(body["status"], "expired");
    assert_eq!(body["timeline"]["is_expired"], true);
    assert_eq!(body["timeline"]["is_active"], false);
    assert_eq!(body["timeline"]["percent"], 100);
    assert_eq!(body["remaining_label"], "Course ended");
}

#[tokio::test]
async fn test_program_not_found() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get_json(&program_path(uuid::Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = app.get_json(&program_path("p1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid program ID");
}

#[tokio::test]
async fn test_day_plan() {
    let app = common::TestApp::new().await;

    let (status, body) = app
        .get_json(&format!("{}/days/sat", program_path(FAT_BURN_ID)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Saturday");
    assert_eq!(body["plan"]["workout"]["title"], "HIIT + Core");
    assert_eq!(body["plan"]["nutrition"]["protein_target"], "120g");

    // Sunday has a workout only
    let (_, body) = app
        .get_json(&format!("{}/days/sun", program_path(FAT_BURN_ID)))
        .await;
    assert!(body["plan"].get("nutrition").is_none());
}

#[tokio::test]
async fn test_day_plan_rejects_rest_and_unknown_days() {
    let app = common::TestApp::new().await;

    let (status, body) = app
        .get_json(&format!("{}/days/mon", program_path(FAT_BURN_ID)))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "mon is a rest day");

    let (status, body) = app
        .get_json(&format!("{}/days/someday", program_path(FAT_BURN_ID)))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_program() {
    let app = common::TestApp::new().await;

    let body = json!({
        "title": "Mobility reset",
        "coach": "FitPro Team",
        "start_date": "2026-02-04",
        "duration_days": 14,
        "schedule": { "weekly": ["sat", "mon"], "rest_days": ["fri"] },
        "plan_by_day": {
            "sat": {
                "workout": { "title": "Hips", "duration_minutes": 20, "calories": 90 }
            }
        }
    });

    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["title"], "Mobility reset");
    assert_eq!(created["timeline"]["passed_days"], 2);
    assert_eq!(created["remaining_label"], "12 days remaining");

    let (_, list) = app.get_json("/api/v1/programs").await;
    assert_eq!(list["total"], 4);

    let id = created["id"].as_str().unwrap();
    let (_, detail) = app.get_json(&program_path(id)).await;
    assert_eq!(detail["default_day"], "sat");
}

#[tokio::test]
async fn test_create_program_reports_invalid_fields() {
    let app = common::TestApp::new().await;

    let body = json!({ "title": "Bad date", "start_date": "soon", "duration_days": 10 });
    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["field"], "start_date");

    let body = json!({ "title": "Bad length", "start_date": "2026-02-01", "duration_days": -1 });
    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["field"], "duration_days");

    let body = json!({
        "title": "Overlap",
        "start_date": "2026-02-01",
        "duration_days": 7,
        "schedule": { "weekly": ["sat"], "rest_days": ["sat"] }
    });
    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["field"], "schedule");
}

#[tokio::test]
async fn test_create_program_needs_a_training_day_and_title() {
    let app = common::TestApp::new().await;

    let body = json!({
        "title": "All rest",
        "start_date": "2026-02-01",
        "duration_days": 7,
        "schedule": { "rest_days": ["sat", "sun", "mon", "tue", "wed", "thu", "fri"] }
    });
    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["field"], "schedule");
    assert_eq!(
        error["error"]["message"],
        "At least one day must remain a non-rest day"
    );

    let body = json!({ "title": "   ", "start_date": "2026-02-01", "duration_days": 7 });
    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["field"], "title");

    let (_, list) = app.get_json("/api/v1/programs").await;
    assert_eq!(list["total"], 3);
}

#[tokio::test]
async fn test_create_program_with_local_start_time() {
    let app = common::TestApp::new().await;

    let body = json!({ "title": "Evening", "start_date": "2026-02-01T10:00:00", "duration_days": 28 });
    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["timeline"]["passed_days"], 5);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = common::TestApp::new().await;

    let body = json!({
        "title": "Huge",
        "goal": "x".repeat(300 * 1024),
        "start_date": "2026-02-01",
        "duration_days": 7
    });
    let (status, _) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_zero_length_program_stays_active() {
    let app = common::TestApp::new().await;

    let body = json!({ "title": "Open ended", "start_date": "2025-06-01", "duration_days": 0 });
    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["status"], "active");
    assert_eq!(created["timeline"]["percent"], 0);
    assert_eq!(created["timeline"]["is_expired"], false);
}

#[tokio::test]
async fn test_toggle_rest_day() {
    let app = common::TestApp::new().await;
    let path = format!("{}/rest-days/sat?selected=sat", program_path(FAT_BURN_ID));

    let (status, response) = app.post(&path, "").await;
    assert_eq!(status, StatusCode::OK);
    let toggle: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(toggle["is_rest"], true);
    assert_eq!(toggle["selected_day"], "sun");
    assert_eq!(toggle["message"], "Saturday is now a rest day");

    // Today (Friday) is still a rest day, so the first selectable day is used
    let (_, detail) = app.get_json(&program_path(FAT_BURN_ID)).await;
    assert_eq!(detail["default_day"], "sun");
}

#[tokio::test]
async fn test_toggle_last_active_day_conflicts() {
    let app = common::TestApp::new().await;
    let toggle = |day: &str| format!("{}/rest-days/{}", program_path(FAT_BURN_ID), day);

    for day in ["sat", "sun", "tue"] {
        let (status, _) = app.post(&toggle(day), "").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, response) = app.post(&toggle("wed"), "").await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["code"], "CONFLICT");

    // Wednesday keeps its plan and is now the only day to open
    let (_, detail) = app.get_json(&program_path(FAT_BURN_ID)).await;
    assert_eq!(detail["default_day"], "wed");
}

#[tokio::test]
async fn test_no_selectable_day() {
    let app = common::TestApp::new().await;

    let body = json!({
        "title": "Empty week",
        "start_date": "2026-02-01",
        "duration_days": 7,
        "schedule": { "weekly": ["sat"], "rest_days": [] }
    });
    let (_, response) = app.post("/api/v1/programs", &body.to_string()).await;
    let created: Value = serde_json::from_str(&response).unwrap();

    let (status, detail) = app
        .get_json(&program_path(created["id"].as_str().unwrap()))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(detail["default_day"].is_null());
}

#[tokio::test]
async fn test_delete_program() {
    let app = common::TestApp::new().await;

    let (status, body) = app.delete(&program_path(NUTRITION_ID)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("deleted"));

    let (status, _) = app.delete(&program_path(NUTRITION_ID)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_program_round_trip_with_postgres() {
    let app = common::TestApp::with_postgres().await;

    let body = json!({
        "title": "Stored program",
        "start_date": "2026-02-01T10:00:00Z",
        "duration_days": 28,
        "schedule": { "weekly": ["sat"], "rest_days": ["fri"] },
        "plan_by_day": {
            "sat": { "nutrition": { "calories_target": 1850, "protein_target": "120g" } }
        }
    });
    let (status, response) = app.post("/api/v1/programs", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_str(&response).unwrap();

    let (status, detail) = app
        .get_json(&program_path(created["id"].as_str().unwrap()))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["remaining_label"], "23 days remaining");
    assert_eq!(detail["default_day"], "sat");
}
