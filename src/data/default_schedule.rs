//! Seed planner used on first run and by `schedule reset`.

use crate::models::schedule::{Activity, DaySchedule, ScheduleDocument};
use std::collections::BTreeMap;

pub const DEFAULT_NOTES: &str = "This is a scratchpad for any notes you want to keep.";

type Row = (&'static str, &'static str, &'static str);

const DAY_1: &[Row] = &[
    ("10:00 AM", "Sleep (post-shift, until ≈3:30 PM)", "sleep"),
    ("3:30 PM", "Wake up", "morning"),
    ("4:00 PM", "Protein-rich meal", "meal"),
    ("4:30 PM", "Take medicine (after meal)", "medicine"),
    ("5:00 PM", "Light stretching / mobility", "morning"),
    ("5:30 PM", "Grocery shopping", "afternoon"),
    ("7:00 PM", "Pre-workout snack", "meal"),
    ("8:00 PM", "Gym – Chest & Triceps", "gym"),
    ("10:00 PM", "Post-workout meal", "meal"),
    ("10:30 PM", "Take medicine (after meal)", "medicine"),
    ("11:00 PM", "Relaxation", "evening"),
    ("12:30 AM", "Bedtime", "evening"),
];

const DAY_2: &[Row] = &[
    ("9:30 AM", "Wake up", "morning"),
    ("10:00 AM", "Protein breakfast", "meal"),
    ("10:30 AM", "Take medicine (after breakfast)", "medicine"),
    ("10:45 AM", "Home maintenance / cleaning", "morning"),
    ("12:30 PM", "Lunch", "meal"),
    ("1:00 PM", "Take medicine (after lunch)", "medicine"),
    ("1:30 PM", "Deep coding session (2–3 h)", "coding"),
    ("4:30 PM", "Learning – online course", "afternoon"),
    ("5:30 PM", "Rest / pre-workout prep", "afternoon"),
    ("6:00 PM", "Pre-workout meal", "meal"),
    ("7:00 PM", "Gym – Back & Biceps", "gym"),
    ("9:00 PM", "Post-workout dinner", "meal"),
    ("9:30 PM", "Take medicine (after dinner)", "medicine"),
    ("10:00 PM", "Relaxation", "evening"),
    ("12:00 AM", "Bedtime", "evening"),
];

const DAY_3: &[Row] = &[
    ("9:30 AM", "Wake up", "morning"),
    ("10:00 AM", "Protein breakfast", "meal"),
    ("10:30 AM", "Take medicine (after breakfast)", "medicine"),
    ("10:45 AM", "Meal prep for remaining days", "morning"),
    ("12:30 PM", "Lunch", "meal"),
    ("1:00 PM", "Take medicine (after lunch)", "medicine"),
    ("1:30 PM", "Coding session (2–3 h)", "coding"),
    ("4:30 PM", "Outdoor hobby / walk", "afternoon"),
    ("5:30 PM", "Rest / pre-workout prep", "afternoon"),
    ("6:00 PM", "Pre-workout snack", "meal"),
    ("7:00 PM", "Gym – Shoulders & Abs", "gym"),
    ("9:00 PM", "Post-workout dinner", "meal"),
    ("9:30 PM", "Take medicine (after dinner)", "medicine"),
    ("10:00 PM", "Reading / downtime", "evening"),
    ("12:00 AM", "Bedtime", "evening"),
];

const DAY_4: &[Row] = &[
    ("9:30 AM", "Wake up", "morning"),
    ("10:00 AM", "Easy breakfast", "meal"),
    ("10:30 AM", "Take medicine (after breakfast)", "medicine"),
    ("11:00 AM", "Laundry & chores", "morning"),
    ("12:30 PM", "Lunch – meet a friend", "meal"),
    ("1:30 PM", "Free time / errands", "afternoon"),
    ("4:30 PM", "Prep for upcoming work block", "afternoon"),
    ("6:00 PM", "Light gym – Stretch & Cardio", "gym"),
    ("7:30 PM", "Cheat-meal dinner out", "meal"),
    ("9:00 PM", "Relax with family / friends", "evening"),
    ("11:00 PM", "Early bedtime", "evening"),
];

const DAYS: [(&str, &str, &[Row]); 4] = [
    ("1", "Recovery after Night Shift", DAY_1),
    ("2", "Productive Focus", DAY_2),
    ("3", "Balance Day", DAY_3),
    ("4", "Social / Rest", DAY_4),
];

pub fn default_document() -> ScheduleDocument {
    let mut schedule = BTreeMap::new();
    for (key, title, rows) in DAYS {
        let activities = rows
            .iter()
            .map(|(t, d, c)| Activity::new(t, d, c))
            .collect();
        schedule.insert(
            key.to_string(),
            DaySchedule {
                title: title.to_string(),
                activities,
            },
        );
    }

    ScheduleDocument {
        schedule,
        notes: DEFAULT_NOTES.to_string(),
        start_date: String::new(),
        user_name: String::new(),
    }
}
