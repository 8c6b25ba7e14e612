//! Weekly schedule and weekday plan resolution
//!
//! A [`WeekPlan`] pairs the training/rest split of a week with the content
//! authored for each weekday. It decides which days a detail view may select,
//! which day it opens on, and owns the rest-day toggle:
//!
//! - Active -> Rest clears the day's content.
//! - Rest -> Active leaves the day without content until it is authored.
//! - A toggle that would leave no non-rest day is rejected.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::ScheduleError;
use crate::weekday::WeekdayKey;

/// Plan content stored for a weekday
pub trait DayContent {
    /// True when the entry carries nothing worth showing
    fn is_empty(&self) -> bool;
}

/// Training days and rest days of a week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub weekly: BTreeSet<WeekdayKey>,
    #[serde(default)]
    pub rest_days: BTreeSet<WeekdayKey>,
}

impl Schedule {
    pub fn is_rest_day(&self, day: WeekdayKey) -> bool {
        self.rest_days.contains(&day)
    }

    /// Days not marked as rest, in week order
    pub fn non_rest_days(&self) -> impl Iterator<Item = WeekdayKey> + '_ {
        WeekdayKey::ALL
            .into_iter()
            .filter(move |day| !self.is_rest_day(*day))
    }

    /// Reject a day listed both as a training day and as a rest day
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self.weekly.intersection(&self.rest_days).next() {
            Some(day) => Err(ScheduleError::OverlappingDay(*day)),
            None => Ok(()),
        }
    }
}

/// State of a single weekday cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCell {
    Rest,
    ActiveWithPlan,
    ActiveWithoutPlan,
}

/// Result of a successful rest-day toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestToggle {
    pub day: WeekdayKey,
    /// Whether the day is a rest day after the toggle
    pub is_rest: bool,
    /// Day that should be selected after the toggle
    pub selected_day: WeekdayKey,
}

/// Schedule plus per-day content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan<P> {
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub plan_by_day: BTreeMap<WeekdayKey, P>,
}

impl<P> Default for WeekPlan<P> {
    fn default() -> Self {
        Self {
            schedule: Schedule::default(),
            plan_by_day: BTreeMap::new(),
        }
    }
}

impl<P: DayContent> WeekPlan<P> {
    pub fn new(schedule: Schedule, plan_by_day: BTreeMap<WeekdayKey, P>) -> Self {
        Self {
            schedule,
            plan_by_day,
        }
    }

    /// Content for `day`, if any non-empty entry exists
    pub fn plan_for(&self, day: WeekdayKey) -> Option<&P> {
        self.plan_by_day.get(&day).filter(|plan| !plan.is_empty())
    }

    /// A day is selectable when it is not a rest day and has content.
    pub fn is_selectable(&self, day: WeekdayKey) -> bool {
        !self.schedule.is_rest_day(day) && self.plan_for(day).is_some()
    }

    pub fn cell(&self, day: WeekdayKey) -> DayCell {
        if self.schedule.is_rest_day(day) {
            DayCell::Rest
        } else if self.plan_for(day).is_some() {
            DayCell::ActiveWithPlan
        } else {
            DayCell::ActiveWithoutPlan
        }
    }

    pub fn selectable_days(&self) -> Vec<WeekdayKey> {
        WeekdayKey::ALL
            .into_iter()
            .filter(|day| self.is_selectable(*day))
            .collect()
    }

    /// Day a detail view opens on: today when selectable, else the first
    /// selectable day in week order, else `None`.
    pub fn default_day(&self, today: WeekdayKey) -> Option<WeekdayKey> {
        if self.is_selectable(today) {
            return Some(today);
        }
        WeekdayKey::ALL
            .into_iter()
            .find(|day| self.is_selectable(*day))
    }

    /// Plan for a day the user asked to view
    pub fn resolve(&self, day: WeekdayKey) -> Result<&P, ScheduleError> {
        if self.schedule.is_rest_day(day) {
            return Err(ScheduleError::RestDay(day));
        }
        self.plan_for(day).ok_or(ScheduleError::NotSelectable(day))
    }

    /// Validate a day chosen in an editor, where days without content may be
    /// selected for authoring.
    pub fn select_day(&self, day: WeekdayKey) -> Result<WeekdayKey, ScheduleError> {
        if self.schedule.is_rest_day(day) {
            return Err(ScheduleError::RestDay(day));
        }
        Ok(day)
    }

    /// Store content for a non-rest day
    pub fn set_day(&mut self, day: WeekdayKey, content: P) -> Result<(), ScheduleError> {
        if self.schedule.is_rest_day(day) {
            return Err(ScheduleError::RestDay(day));
        }
        self.schedule.weekly.insert(day);
        self.plan_by_day.insert(day, content);
        Ok(())
    }

    /// Flip `day` between rest and active.
    ///
    /// `selected` is the day currently selected in the editor; the returned
    /// [`RestToggle`] carries the day that should be selected afterwards. On
    /// error nothing is modified.
    pub fn toggle_rest_day(
        &mut self,
        day: WeekdayKey,
        selected: WeekdayKey,
    ) -> Result<RestToggle, ScheduleError> {
        let will_rest = !self.schedule.is_rest_day(day);

        if will_rest && self.schedule.non_rest_days().all(|d| d == day) {
            return Err(ScheduleError::LastActiveDay);
        }

        if will_rest {
            self.schedule.rest_days.insert(day);
            self.schedule.weekly.remove(&day);
        } else {
            self.schedule.rest_days.remove(&day);
            self.schedule.weekly.insert(day);
        }
        self.plan_by_day.remove(&day);

        let selected_day = if self.schedule.is_rest_day(selected) {
            match self.schedule.non_rest_days().next() {
                Some(first) => first,
                None => return Err(ScheduleError::LastActiveDay),
            }
        } else {
            selected
        };

        Ok(RestToggle {
            day,
            is_rest: will_rest,
            selected_day,
        })
    }
}
