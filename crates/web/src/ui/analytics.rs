use axum::extract::{Query, State};
use storage::{Database, dto::analytics::TimeSlotLoad};

use super::{PageQuery, PageResult, charts, layout};
use crate::features::analytics::services::{self, AnalyticsOverview, HEATMAP_WINDOW_DAYS};

pub async fn page(State(db): State<Database>, Query(query): Query<PageQuery>) -> PageResult {
    let overview = services::overview(db.pool(), crate::today()).await?;

    Ok(layout::page(
        "Analytics",
        "/analytics",
        query.flash,
        &render(&overview),
    ))
}

fn render(data: &AnalyticsOverview) -> String {
    let memberships: Vec<(String, f64)> = data
        .memberships
        .iter()
        .map(|m| (m.membership_type.label().to_string(), m.count as f64))
        .collect();

    let ratings: Vec<(String, f64)> = data
        .trainer_ratings
        .iter()
        .map(|t| (format!("{} ({})", t.name, t.specialty), t.rating))
        .collect();

    let monthly_count: Vec<(String, f64)> = data
        .monthly
        .iter()
        .map(|m| (m.month.clone(), m.workout_count as f64))
        .collect();

    let monthly_calories: Vec<(String, f64)> = data
        .monthly
        .iter()
        .map(|m| (m.month.clone(), m.avg_calories))
        .collect();

    let popular: Vec<(String, f64)> = data
        .popular_exercises
        .iter()
        .map(|e| {
            (
                format!("{} (avg {:.1} kg)", e.exercise_name, e.avg_weight),
                e.frequency as f64,
            )
        })
        .collect();

    let calories: Vec<(String, f64)> = data
        .calories
        .iter()
        .map(|e| (e.exercise_name.clone(), e.avg_calories))
        .collect();

    let load: Vec<(String, f64)> = data
        .trainer_load
        .iter()
        .map(|t| {
            (
                format!("{} ({} classes)", t.name, t.class_count),
                t.avg_bookings,
            )
        })
        .collect();

    [
        "<h2>Members</h2>".to_string(),
        charts::bar_chart("Active members by plan", &memberships, "members"),
        "<h2>Trainers</h2>".to_string(),
        charts::bar_chart("Trainer ratings", &ratings, ""),
        charts::bar_chart("Average bookings per class", &load, ""),
        "<h2>Workouts</h2>".to_string(),
        charts::bar_chart("Workouts per month", &monthly_count, "workouts"),
        charts::bar_chart(
            "Average calories per workout by month",
            &monthly_calories,
            "kcal",
        ),
        charts::bar_chart("Most popular exercises", &popular, "times"),
        charts::bar_chart("Average calories by exercise", &calories, "kcal"),
        charts::heatmap(
            &format!("Workouts in the last {HEATMAP_WINDOW_DAYS} days"),
            &data.heatmap,
        ),
        "<h2>Classes</h2>".to_string(),
        time_slot_table(&data.time_slots),
    ]
    .concat()
}

fn time_slot_table(slots: &[TimeSlotLoad]) -> String {
    if slots.is_empty() {
        return "<p>No classes scheduled yet.</p>".to_string();
    }

    let rows: String = slots
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
                layout::escape(&s.label),
                s.class_count,
                s.avg_bookings
            )
        })
        .collect();

    format!(
        "<div class=\"chart\"><h3>Bookings by time of day</h3><table><tr><th>Time slot</th>\
         <th>Classes</th><th>Average bookings</th></tr>{rows}</table></div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::dto::analytics::{ActivityHeatmap, MonthlyActivity};

    #[test]
    fn test_monthly_chart_uses_average_calories() {
        let data = AnalyticsOverview {
            memberships: Vec::new(),
            trainer_ratings: Vec::new(),
            monthly: vec![MonthlyActivity {
                month: "2026-10".to_string(),
                workout_count: 2,
                avg_calories: 250.5,
                total_calories: 501,
            }],
            popular_exercises: Vec::new(),
            calories: Vec::new(),
            trainer_load: Vec::new(),
            time_slots: Vec::new(),
            heatmap: ActivityHeatmap::from_cells(&[]),
        };

        let html = render(&data);

        assert!(html.contains("Average calories per workout by month"));
        assert!(html.contains("250.5 kcal"));
        assert!(!html.contains("501 kcal"));
        assert!(html.contains("2 workouts"));
    }
}
