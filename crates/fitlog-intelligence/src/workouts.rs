// ABOUTME: Workout aggregation: weekly totals, consecutive-day streaks, and history ordering
// ABOUTME: Only completed sessions count toward summaries and streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use fitlog_core::models::WorkoutEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Days in a summary week
const WEEK_DAYS: u64 = 7;

/// Totals for one week of completed workouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWorkoutSummary {
    /// Completed sessions in the week
    pub count: usize,
    /// Minutes trained in the week
    pub total_duration: u32,
    /// Calories burned in the week
    pub total_calories: f64,
    /// Consecutive days with a completed session, ending on the reference day
    pub streak_days: u32,
}

/// Summarize completed workouts in `[week_start, week_start + 7 days)`
///
/// The streak is computed as of `today` and is not limited to the week.
#[must_use]
pub fn weekly_workout_summary(
    workouts: &[WorkoutEntry],
    week_start: NaiveDate,
    today: NaiveDate,
) -> WeeklyWorkoutSummary {
    let week_end = week_start
        .checked_add_days(Days::new(WEEK_DAYS))
        .unwrap_or(NaiveDate::MAX);
    let mut in_week: Vec<&WorkoutEntry> = workouts
        .iter()
        .filter(|w| w.completed && w.date >= week_start && w.date < week_end)
        .collect();
    // Fixed order so float accumulation is independent of storage order
    in_week.sort_by(|a, b| {
        a.calories
            .total_cmp(&b.calories)
            .then_with(|| a.date.cmp(&b.date))
    });

    WeeklyWorkoutSummary {
        count: in_week.len(),
        total_duration: in_week
            .iter()
            .fold(0_u32, |acc, w| acc.saturating_add(w.duration)),
        total_calories: in_week.iter().map(|w| w.calories).sum(),
        streak_days: workout_streak(workouts, today),
    }
}

/// Consecutive calendar days ending on `today` with at least one completed workout
///
/// A day without a completed workout ends the streak; `today` without one
/// means a streak of zero.
#[must_use]
pub fn workout_streak(workouts: &[WorkoutEntry], today: NaiveDate) -> u32 {
    let active_days: BTreeSet<NaiveDate> = workouts
        .iter()
        .filter(|w| w.completed && w.date <= today)
        .map(|w| w.date)
        .collect();

    let mut streak = 0;
    let mut day = today;
    while active_days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Workouts ordered newest first (ties broken by id, newest first)
#[must_use]
pub fn workout_history(workouts: &[WorkoutEntry]) -> Vec<WorkoutEntry> {
    let mut history = workouts.to_vec();
    history.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    // Monday 2024-03-04
    fn week_day(weekday: Weekday) -> NaiveDate {
        NaiveDate::from_isoywd_opt(2024, 10, weekday).unwrap()
    }

    fn workout(id: i64, date: NaiveDate, duration: u32, calories: f64) -> WorkoutEntry {
        WorkoutEntry {
            id,
            name: format!("session-{id}"),
            duration,
            calories,
            category: "cardio".to_owned(),
            date,
            completed: true,
        }
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let workouts = vec![
            workout(1, week_day(Weekday::Mon), 30, 250.0),
            workout(2, week_day(Weekday::Tue), 20, 150.0),
            workout(3, week_day(Weekday::Wed), 35, 200.0),
            workout(4, week_day(Weekday::Fri), 40, 280.0),
        ];
        assert_eq!(workout_streak(&workouts, week_day(Weekday::Fri)), 1);
        assert_eq!(workout_streak(&workouts, week_day(Weekday::Wed)), 3);
        assert_eq!(workout_streak(&workouts, week_day(Weekday::Thu)), 0);
    }

    #[test]
    fn test_streak_counts_days_not_sessions() {
        let workouts = vec![
            workout(1, week_day(Weekday::Tue), 30, 250.0),
            workout(2, week_day(Weekday::Tue), 20, 150.0),
            workout(3, week_day(Weekday::Wed), 35, 200.0),
        ];
        assert_eq!(workout_streak(&workouts, week_day(Weekday::Wed)), 2);
    }

    #[test]
    fn test_streak_ignores_incomplete_sessions() {
        let mut skipped = workout(2, week_day(Weekday::Tue), 30, 250.0);
        skipped.completed = false;
        let workouts = vec![workout(1, week_day(Weekday::Mon), 30, 250.0), skipped];
        assert_eq!(workout_streak(&workouts, week_day(Weekday::Tue)), 0);
    }

    #[test]
    fn test_weekly_summary_only_counts_the_week() {
        let previous_sunday = week_day(Weekday::Mon).pred_opt().unwrap();
        let workouts = vec![
            workout(1, previous_sunday, 60, 500.0),
            workout(2, week_day(Weekday::Mon), 25, 250.0),
            workout(3, week_day(Weekday::Wed), 20, 150.0),
            workout(4, week_day(Weekday::Sun), 30, 120.0),
        ];

        let summary =
            weekly_workout_summary(&workouts, week_day(Weekday::Mon), week_day(Weekday::Sun));
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_duration, 75);
        assert!((summary.total_calories - 520.0).abs() < 1e-9);
        assert_eq!(summary.streak_days, 1);
    }

    #[test]
    fn test_weekly_summary_does_not_depend_on_order() {
        let mut workouts = vec![
            workout(1, week_day(Weekday::Mon), 10, 0.1),
            workout(2, week_day(Weekday::Tue), 15, 0.2),
            workout(3, week_day(Weekday::Tue), 20, 0.3),
            workout(4, week_day(Weekday::Thu), 25, 1e16),
            workout(5, week_day(Weekday::Fri), 30, 1.0),
        ];
        let expected =
            weekly_workout_summary(&workouts, week_day(Weekday::Mon), week_day(Weekday::Fri));

        for reversed in [false, true] {
            if reversed {
                workouts.reverse();
            }
            for _ in 0..workouts.len() {
                workouts.rotate_left(1);
                let summary = weekly_workout_summary(
                    &workouts,
                    week_day(Weekday::Mon),
                    week_day(Weekday::Fri),
                );
                assert_eq!(summary, expected);
                assert_eq!(
                    summary.total_calories.to_bits(),
                    expected.total_calories.to_bits()
                );
            }
        }
    }

    #[test]
    fn test_history_is_newest_first() {
        let workouts = vec![
            workout(1, week_day(Weekday::Mon), 25, 250.0),
            workout(3, week_day(Weekday::Wed), 20, 150.0),
            workout(2, week_day(Weekday::Wed), 30, 120.0),
        ];
        let ids: Vec<i64> = workout_history(&workouts).iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
