use axum::{
    Form,
    extract::{Path, Query, State, rejection::FormRejection},
    response::Redirect,
};
use chrono::NaiveDate;
use serde::Deserialize;
use storage::{
    Database,
    dto::workout::{CreateWorkoutRequest, EXERCISES, MemberActivity, WorkoutRecommendation},
    models::{Member, Status, WorkoutRecord},
};
use validator::Validate;

use super::{
    PageResult, charts,
    layout::{self, Flash, escape},
};
use crate::{error::WebError, features::members::services as members, features::workouts::services};

const PATH: &str = "/workouts";

#[derive(Debug, Default, Deserialize)]
pub struct WorkoutsQuery {
    pub flash: Option<Flash>,
    pub member_id: Option<i64>,
}

/// Hidden field on the delete button so the view stays on the same member
#[derive(Debug, Default, Deserialize)]
pub struct ReturnTo {
    pub member_id: Option<i64>,
}

fn view_path(member_id: Option<i64>) -> String {
    match member_id {
        Some(id) => format!("{PATH}?member_id={id}"),
        None => PATH.to_string(),
    }
}

pub async fn page(State(db): State<Database>, Query(query): Query<WorkoutsQuery>) -> PageResult {
    let today = crate::today();
    let all_members = members::list_members(db.pool(), None).await?;
    let selected = query
        .member_id
        .and_then(|id| all_members.iter().find(|m| m.id == id))
        .or_else(|| all_members.first());

    let mut body = String::new();

    if all_members.is_empty() {
        body.push_str("<p>Register a member before logging workouts.</p>");
    } else {
        body.push_str(&member_picker(&all_members, selected.map(|m| m.id)));
    }

    if let Some(member) = selected {
        let activity = members::member_activity(db.pool(), member.id).await?;
        let plan = members::recommendations(db.pool(), member.id, today).await?;
        body.push_str(&activity_section(member, &activity));
        body.push_str(&recommendation_section(&plan));
    }

    let active: Vec<&Member> = all_members
        .iter()
        .filter(|m| m.status == Status::Active)
        .collect();
    if !active.is_empty() {
        body.push_str(&workout_form(&active, selected.map(|m| m.id), today));
    }

    Ok(layout::page(
        "Workout records",
        &view_path(selected.map(|m| m.id)),
        query.flash,
        &body,
    ))
}

fn member_options<'a>(members: impl IntoIterator<Item = &'a Member>, selected: Option<i64>) -> String {
    let selected = selected.map(|id| id.to_string());
    layout::options(
        members
            .into_iter()
            .map(|m| (m.id.to_string(), m.name.as_str())),
        selected.as_deref(),
    )
}

fn member_picker(members: &[Member], selected: Option<i64>) -> String {
    format!(
        "<form method=\"get\" action=\"{PATH}\"><label>Member \
         <select name=\"member_id\">{}</select></label>\
         <button type=\"submit\">Show</button></form>",
        member_options(members, selected)
    )
}

fn activity_section(member: &Member, activity: &MemberActivity) -> String {
    let mut html = format!("<h2>{}</h2>", escape(&member.name));

    if activity.workouts.is_empty() {
        html.push_str("<p>No workouts logged yet.</p>");
        return html;
    }

    html.push_str(&history_table(member.id, &activity.workouts));

    let calories: Vec<(String, f64)> = activity
        .daily_calories
        .iter()
        .map(|d| (d.date.to_string(), d.calories as f64))
        .collect();
    html.push_str(&charts::bar_chart("Calories burned per day", &calories, "kcal"));

    let frequency: Vec<(String, f64)> = activity
        .exercise_frequency
        .iter()
        .map(|e| (e.exercise_name.clone(), e.count as f64))
        .collect();
    html.push_str(&charts::bar_chart("Exercise frequency", &frequency, "times"));

    html
}

fn history_table(member_id: i64, workouts: &[WorkoutRecord]) -> String {
    let rows: String = workouts
        .iter()
        .map(|w| {
            let delete = format!(
                "<form class=\"inline\" method=\"post\" action=\"{PATH}/{}/delete\">\
                 <input type=\"hidden\" name=\"member_id\" value=\"{member_id}\">\
                 <button type=\"submit\">Delete</button></form>",
                w.id
            );
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{delete}</td></tr>",
                w.date,
                escape(&w.exercise_name),
                w.sets,
                w.reps,
                w.weight,
                w.duration,
                w.calories_burned,
            )
        })
        .collect();

    format!(
        "<table><tr><th>Date</th><th>Exercise</th><th>Sets</th><th>Reps</th>\
         <th>Weight (kg)</th><th>Minutes</th><th>Calories</th><th></th></tr>{rows}</table>"
    )
}

fn recommendation_section(plan: &[WorkoutRecommendation]) -> String {
    let items: String = plan
        .iter()
        .map(|r| format!("<li>{}</li>", escape(&r.to_string())))
        .collect();
    format!("<h3>Recommended next workouts</h3><ul>{items}</ul>")
}

fn workout_form(members: &[&Member], selected: Option<i64>, today: NaiveDate) -> String {
    let exercises = layout::options(EXERCISES.iter().map(|e| (e.to_string(), *e)), None);

    format!(
        "<h2>Log a workout</h2><form method=\"post\" action=\"{PATH}\"><fieldset>\
         <label>Member <select name=\"member_id\">{}</select></label>\
         <label>Exercise <select name=\"exercise_name\">{exercises}</select></label>\
         <label>Sets <input name=\"sets\" type=\"number\" min=\"1\" max=\"10\" value=\"3\"></label>\
         <label>Reps <input name=\"reps\" type=\"number\" min=\"1\" max=\"50\" value=\"10\"></label>\
         <label>Weight (kg) <input name=\"weight\" type=\"number\" min=\"0\" step=\"2.5\" value=\"20\"></label>\
         <label>Duration (min) <input name=\"duration\" type=\"number\" min=\"1\" value=\"30\"></label>\
         <label>Calories <input name=\"calories_burned\" type=\"number\" min=\"0\" value=\"200\"></label>\
         <label>Date <input name=\"date\" type=\"date\" value=\"{today}\"></label>\
         <button type=\"submit\">Save</button></fieldset></form>",
        member_options(members.iter().copied(), selected)
    )
}

async fn log_workout(db: &Database, req: &CreateWorkoutRequest) -> Result<WorkoutRecord, WebError> {
    req.validate()?;
    Ok(services::log_workout(db.pool(), req).await?)
}

pub async fn create(
    State(db): State<Database>,
    form: Result<Form<CreateWorkoutRequest>, FormRejection>,
) -> Redirect {
    let (member_id, result) = match form {
        Ok(Form(req)) => (Some(req.member_id), log_workout(&db, &req).await),
        Err(rejection) => (None, Err(WebError::BadRequest(rejection.body_text()))),
    };

    layout::after_submit(&view_path(member_id), result, Flash::WorkoutSaved)
}

pub async fn delete(
    State(db): State<Database>,
    Path(id): Path<i64>,
    form: Result<Form<ReturnTo>, FormRejection>,
) -> Redirect {
    let (member_id, result) = match form {
        Ok(Form(back)) => (
            back.member_id,
            services::delete_workout(db.pool(), id)
                .await
                .map_err(WebError::from),
        ),
        Err(rejection) => (None, Err(WebError::BadRequest(rejection.body_text()))),
    };

    layout::after_submit(&view_path(member_id), result, Flash::WorkoutDeleted)
}
