use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::MembershipType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MembershipCount {
    pub membership_type: MembershipType,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainerRating {
    pub name: String,
    pub rating: f64,
    pub specialty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MonthlyActivity {
    /// `YYYY-MM`
    pub month: String,
    pub workout_count: i64,
    pub avg_calories: f64,
    pub total_calories: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PopularExercise {
    pub exercise_name: String,
    pub frequency: i64,
    pub avg_weight: f64,
    pub avg_calories: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExerciseCalories {
    pub exercise_name: String,
    pub avg_calories: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainerLoad {
    pub name: String,
    pub specialty: String,
    pub class_count: i64,
    pub avg_bookings: f64,
}

/// Start-of-class band used by the time-of-day distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Dawn,
    Morning,
    Midday,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        Self::Dawn,
        Self::Morning,
        Self::Midday,
        Self::Afternoon,
        Self::Evening,
    ];

    /// Position in [`TimeSlot::ALL`], as bucketed by the SQL query.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dawn => "Dawn (06-09)",
            Self::Morning => "Morning (09-12)",
            Self::Midday => "Midday (12-15)",
            Self::Afternoon => "Afternoon (15-18)",
            Self::Evening => "Evening (18-22)",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeSlotLoad {
    pub slot: TimeSlot,
    pub label: String,
    pub class_count: i64,
    pub avg_bookings: f64,
}

/// Raw weekday/week bucket as returned by SQLite
#[derive(Debug, Clone, FromRow)]
pub struct HeatmapCell {
    /// `strftime('%w')`: 0 = Sunday
    pub weekday: i64,
    /// 1..=4
    pub week: i64,
    pub workout_count: i64,
}

/// Workout counts per weekday (rows, Monday first) and week of month (columns)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityHeatmap {
    pub weekdays: Vec<String>,
    pub weeks: Vec<String>,
    pub counts: Vec<Vec<i64>>,
}

impl ActivityHeatmap {
    pub const WEEKDAYS: [&'static str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    pub const WEEKS: [&'static str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];

    /// Pivot sparse buckets into a dense grid, filling gaps with zero.
    pub fn from_cells(cells: &[HeatmapCell]) -> Self {
        let mut counts = vec![vec![0i64; Self::WEEKS.len()]; Self::WEEKDAYS.len()];

        for cell in cells {
            // SQLite numbers Sunday as 0, the grid starts on Monday.
            let row = (cell.weekday + 6).rem_euclid(7) as usize;
            let Some(col) = usize::try_from(cell.week - 1)
                .ok()
                .filter(|c| *c < Self::WEEKS.len())
            else {
                continue;
            };
            counts[row][col] += cell.workout_count;
        }

        Self {
            weekdays: Self::WEEKDAYS.iter().map(|d| d.to_string()).collect(),
            weeks: Self::WEEKS.iter().map(|w| w.to_string()).collect(),
            counts,
        }
    }

    pub fn max_count(&self) -> i64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> i64 {
        self.counts.iter().flatten().sum()
    }
}
