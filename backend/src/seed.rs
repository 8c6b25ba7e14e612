//! Demo data for local development
//!
//! Three programs and three students that exercise every day-cell state:
//! days with both plans, workout-only days, nutrition-only days and rest days.

use crate::repositories::{ProgramStore, StudentPlanStore};
use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use fitpro_shared::{
    DayEntry, DayPlan, Meal, NutritionPlan, PlanType, Program, Schedule, StudentPlan,
    StudentStatus, WeekPlan, WeekdayKey, WorkoutPlan,
};
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

use WeekdayKey::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};

pub const FAT_BURN_ID: Uuid = Uuid::from_u128(0x0000_0001_0000_4000_8000_0000_0000_0001);
pub const HYPERTROPHY_ID: Uuid = Uuid::from_u128(0x0000_0001_0000_4000_8000_0000_0000_0002);
pub const NUTRITION_ID: Uuid = Uuid::from_u128(0x0000_0001_0000_4000_8000_0000_0000_0003);

pub const MARYAM_ID: Uuid = Uuid::from_u128(0x0000_0002_0000_4000_8000_0000_0000_0001);
pub const REZA_ID: Uuid = Uuid::from_u128(0x0000_0002_0000_4000_8000_0000_0000_0002);
pub const NASTARAN_ID: Uuid = Uuid::from_u128(0x0000_0002_0000_4000_8000_0000_0000_0003);

/// Fill empty stores with the demo programs and students.
///
/// Stores that already hold records are left alone.
pub async fn seed_demo_data(
    programs: &dyn ProgramStore,
    students: &dyn StudentPlanStore,
    now: DateTime<Utc>,
) -> Result<()> {
    if programs.list().await?.is_empty() {
        let demo = demo_programs();
        for program in &demo {
            programs.save(program).await?;
        }
        info!(count = demo.len(), "Seeded demo programs");
    }

    if students.list().await?.is_empty() {
        let demo = demo_students(now);
        for plan in &demo {
            students.save(plan).await?;
        }
        info!(count = demo.len(), "Seeded demo students");
    }

    Ok(())
}

fn schedule(weekly: &[WeekdayKey], rest_days: &[WeekdayKey]) -> Schedule {
    Schedule {
        weekly: weekly.iter().copied().collect(),
        rest_days: rest_days.iter().copied().collect(),
    }
}

fn start(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

fn workout(title: &str, duration_minutes: u32, calories: u32, steps: &[&str]) -> WorkoutPlan {
    WorkoutPlan {
        title: title.to_string(),
        duration_minutes,
        calories,
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

fn nutrition(calories_target: u32, protein_target: &str, meals: &[(&str, &str)]) -> NutritionPlan {
    NutritionPlan {
        calories_target,
        protein_target: protein_target.to_string(),
        meals: meals
            .iter()
            .map(|(title, detail)| Meal {
                title: title.to_string(),
                detail: detail.to_string(),
            })
            .collect(),
    }
}

fn day(workout: Option<WorkoutPlan>, nutrition: Option<NutritionPlan>) -> DayPlan {
    DayPlan { workout, nutrition }
}

pub fn demo_programs() -> Vec<Program> {
    vec![fat_burn(), hypertrophy(), nutrition_only()]
}

fn fat_burn() -> Program {
    let plan_by_day = BTreeMap::from([
        (
            Sat,
            day(
                Some(workout(
                    "HIIT + Core",
                    35,
                    420,
                    &["5 min warm-up", "HIIT (20 min)", "Core (10 min)", "5 min cool-down"],
                )),
                Some(nutrition(
                    1850,
                    "120g",
                    &[
                        ("Breakfast", "Omelette, wholegrain bread and vegetables"),
                        ("Lunch", "Grilled chicken, brown rice and salad"),
                        ("Snack", "Greek yoghurt and fruit"),
                        ("Dinner", "Fish and steamed vegetables"),
                    ],
                )),
            ),
        ),
        (
            Sun,
            day(
                Some(workout(
                    "Cardio Intervals",
                    30,
                    360,
                    &["Warm-up", "20 min intervals", "Stretching"],
                )),
                None,
            ),
        ),
        (
            Tue,
            day(
                None,
                Some(nutrition(
                    1750,
                    "115g",
                    &[
                        ("Breakfast", "Greek yoghurt, oats and berries"),
                        ("Lunch", "Tuna, salad and wholegrain bread"),
                        ("Snack", "Fruit and almonds"),
                        ("Dinner", "Chicken and vegetables"),
                    ],
                )),
            ),
        ),
        (
            Wed,
            day(
                Some(workout(
                    "Full Body Circuit",
                    40,
                    460,
                    &["Squat", "Push-up", "Lunge", "Plank", "Stretching"],
                )),
                Some(nutrition(
                    1900,
                    "125g",
                    &[("Plan", "Balanced with enough protein")],
                )),
            ),
        ),
    ]);

    Program {
        id: FAT_BURN_ID,
        title: "4-week fat burn".to_string(),
        goal: "Weight loss and endurance".to_string(),
        level: "Beginner to intermediate".to_string(),
        coach: "FitPro Team".to_string(),
        tags: vec!["HIIT".to_string(), "Core".to_string(), "Cardio".to_string()],
        start_date: start(2026, 2, 1),
        duration_days: 28,
        week: WeekPlan::new(schedule(&[Sat, Sun, Tue, Wed], &[Mon, Thu, Fri]), plan_by_day),
    }
}

fn hypertrophy() -> Program {
    let plan_by_day = BTreeMap::from([
        (
            Sat,
            day(
                Some(workout(
                    "Push (chest/shoulders/triceps)",
                    55,
                    520,
                    &["Bench press 4x8", "Dumbbell shoulder press 4x10", "Incline press 3x10", "Dips 3xmax"],
                )),
                Some(nutrition(2600, "160g", &[("Plan", "High calorie, high protein")])),
            ),
        ),
        (
            Sun,
            day(
                Some(workout(
                    "Pull (back/biceps)",
                    55,
                    510,
                    &["Lat pulldown 4x10", "Pull-up 3xmax", "Dumbbell row 4x10", "Curl 3x12"],
                )),
                None,
            ),
        ),
        (
            Mon,
            day(
                Some(workout(
                    "Legs",
                    60,
                    560,
                    &["Squat 4x8", "Deadlift 3x6", "Lunge 3x12", "Calf raise 4x15"],
                )),
                Some(nutrition(2700, "170g", &[("Plan", "Extra carbohydrate for leg day")])),
            ),
        ),
        (
            Wed,
            day(
                None,
                Some(nutrition(
                    2400,
                    "160g",
                    &[("Recovery", "Steady protein, plenty of water and vegetables")],
                )),
            ),
        ),
        (
            Thu,
            day(
                Some(workout(
                    "Upper Mix",
                    50,
                    480,
                    &["Incline press", "Lat pulldown", "Shoulder press", "Crunch"],
                )),
                None,
            ),
        ),
    ]);

    Program {
        id: HYPERTROPHY_ID,
        title: "8-week hypertrophy".to_string(),
        goal: "Size and strength".to_string(),
        level: "Intermediate to advanced".to_string(),
        coach: "Strength Lab".to_string(),
        tags: vec!["Push/Pull/Legs".to_string(), "Hypertrophy".to_string()],
        start_date: start(2026, 1, 10),
        duration_days: 56,
        week: WeekPlan::new(schedule(&[Sat, Sun, Mon, Wed, Thu], &[Tue, Fri]), plan_by_day),
    }
}

fn nutrition_only() -> Program {
    let days = [
        (Sat, 2100, "130g", "Balanced, high fibre"),
        (Sun, 2100, "130g", "Controlled carbohydrate"),
        (Mon, 2000, "125g", "High protein, healthy fats"),
        (Tue, 2050, "128g", "More vegetables"),
        (Wed, 2100, "130g", "Balanced"),
        (Thu, 2000, "125g", "Low salt, more water"),
    ];
    let plan_by_day = days
        .into_iter()
        .map(|(key, calories, protein, detail)| {
            (key, day(None, Some(nutrition(calories, protein, &[("Plan", detail)]))))
        })
        .collect();

    Program {
        id: NUTRITION_ID,
        title: "30-day nutrition plan".to_string(),
        goal: "Nutrition only, no training".to_string(),
        level: "All levels".to_string(),
        coach: "Nutrition Team".to_string(),
        tags: vec!["Nutrition".to_string(), "Macro".to_string()],
        start_date: start(2026, 2, 3),
        duration_days: 30,
        week: WeekPlan::new(
            schedule(&[Sat, Sun, Mon, Tue, Wed, Thu], &[Fri]),
            plan_by_day,
        ),
    }
}

pub fn demo_students(now: DateTime<Utc>) -> Vec<StudentPlan> {
    let student = |student_id: Uuid,
                   full_name: &str,
                   phone: &str,
                   status: StudentStatus,
                   plan_title: &str,
                   plan_type: PlanType,
                   weekly: &[WeekdayKey],
                   rest_days: &[WeekdayKey]| {
        let week: WeekPlan<DayEntry> = WeekPlan::new(schedule(weekly, rest_days), BTreeMap::new());
        let selected_day = week.schedule.non_rest_days().next().unwrap_or(Sat);
        StudentPlan {
            student_id,
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            plan_title: plan_title.to_string(),
            plan_type,
            status,
            selected_day,
            week,
            updated_at: now,
        }
    };

    vec![
        student(
            MARYAM_ID,
            "Maryam Ahmadi",
            "09100000008",
            StudentStatus::Pending,
            "4-week fat burn",
            PlanType::Both,
            &[Sat, Sun, Tue, Wed],
            &[Mon, Thu, Fri],
        ),
        student(
            REZA_ID,
            "Reza Hosseini",
            "09360000007",
            StudentStatus::Active,
            "8-week hypertrophy",
            PlanType::Workout,
            &[Sat, Sun, Mon, Wed, Thu],
            &[Tue, Fri],
        ),
        student(
            NASTARAN_ID,
            "Nastaran Karimi",
            "09910000003",
            StudentStatus::Pending,
            "30-day nutrition plan",
            PlanType::Nutrition,
            &[Sat, Sun, Mon, Tue, Wed, Thu],
            &[Fri],
        ),
    ]
}
