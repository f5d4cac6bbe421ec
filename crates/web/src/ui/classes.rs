use axum::{
    Form,
    extract::{Path, Query, State, rejection::FormRejection},
    response::Redirect,
};
use chrono::{Days, NaiveDate};
use serde::Deserialize;
use storage::{
    Database,
    dto::{
        booking::BookingDetail,
        class::{ClassListing, CreateClassRequest},
    },
    models::{BookingStatus, GymClass, Member, Status, Trainer},
};
use validator::Validate;

use super::{
    PageQuery, PageResult,
    layout::{self, Flash, escape},
};
use crate::{
    error::WebError,
    features::{classes::services, members::services as members, trainers::services as trainers},
};

const PATH: &str = "/classes";

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub class_id: i64,
    pub member_id: i64,
}

pub async fn page(State(db): State<Database>, Query(query): Query<PageQuery>) -> PageResult {
    let today = crate::today();
    let upcoming = services::upcoming_classes(db.pool(), today).await?;
    let all = services::list_classes(db.pool()).await?;
    let active_members = members::list_members(db.pool(), Some(Status::Active)).await?;
    let active_trainers = trainers::list_trainers(db.pool(), Some(Status::Active)).await?;

    let mut bookings = Vec::with_capacity(upcoming.len());
    for class in &upcoming {
        bookings.push(services::class_bookings(db.pool(), class.id).await?);
    }

    let body = format!(
        "<h2>Upcoming classes</h2>{}{}{}{}<h2>All classes</h2>{}",
        class_table(&upcoming),
        booking_form(&upcoming, &active_members),
        booking_lists(&upcoming, &bookings),
        class_form(&active_trainers, today),
        all_classes_table(&all),
    );

    Ok(layout::page("Class booking", PATH, query.flash, &body))
}

fn class_table(classes: &[ClassListing]) -> String {
    if classes.is_empty() {
        return "<p>No upcoming classes.</p>".to_string();
    }

    let rows: String = classes
        .iter()
        .map(|c| {
            let spots = if c.is_full() {
                "<span class=\"expired\">Full</span>".to_string()
            } else {
                c.available_spots.to_string()
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{} min</td>\
                 <td>{}/{}</td><td>{spots}</td></tr>",
                escape(&c.class_name),
                escape(&c.trainer_name),
                c.date,
                escape(&c.time),
                c.duration,
                c.current_bookings,
                c.max_capacity,
            )
        })
        .collect();

    format!(
        "<table><tr><th>Class</th><th>Trainer</th><th>Date</th><th>Time</th><th>Length</th>\
         <th>Booked</th><th>Spots left</th></tr>{rows}</table>"
    )
}

/// Every class, newest first, each with a delete action that also drops its bookings.
fn all_classes_table(classes: &[ClassListing]) -> String {
    if classes.is_empty() {
        return "<p>No classes scheduled.</p>".to_string();
    }

    let rows: String = classes
        .iter()
        .map(|c| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&c.class_name),
                escape(&c.trainer_name),
                c.date,
                escape(&c.time),
                c.current_bookings,
                layout::post_button(&format!("{PATH}/{}/delete", c.id), "Delete"),
            )
        })
        .collect();

    format!(
        "<table><tr><th>Class</th><th>Trainer</th><th>Date</th><th>Time</th>\
         <th>Booked</th><th></th></tr>{rows}</table>"
    )
}

fn class_label(class: &ClassListing) -> String {
    format!(
        "{} · {} {} ({} left)",
        class.class_name, class.date, class.time, class.available_spots
    )
}

fn booking_form(classes: &[ClassListing], members: &[Member]) -> String {
    let open: Vec<(String, String)> = classes
        .iter()
        .filter(|c| !c.is_full())
        .map(|c| (c.id.to_string(), class_label(c)))
        .collect();

    if open.is_empty() || members.is_empty() {
        return String::new();
    }

    let class_options = layout::options(open.iter().map(|(id, label)| (id.clone(), label.as_str())), None);
    let member_options = layout::options(
        members.iter().map(|m| (m.id.to_string(), m.name.as_str())),
        None,
    );

    format!(
        "<h2>Book a class</h2><form method=\"post\" action=\"/bookings\"><fieldset>\
         <label>Class <select name=\"class_id\">{class_options}</select></label>\
         <label>Member <select name=\"member_id\">{member_options}</select></label>\
         <button type=\"submit\">Book</button></fieldset></form>"
    )
}

fn booking_lists(classes: &[ClassListing], bookings: &[Vec<BookingDetail>]) -> String {
    let sections: String = classes
        .iter()
        .zip(bookings)
        .filter(|(_, list)| !list.is_empty())
        .map(|(class, list)| {
            let rows: String = list
                .iter()
                .map(|b| {
                    let action = if b.status == BookingStatus::Confirmed {
                        layout::post_button(&format!("/bookings/{}/cancel", b.id), "Cancel")
                    } else {
                        String::new()
                    };
                    format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{action}</td></tr>",
                        escape(&b.member_name),
                        b.booking_date,
                        b.status
                    )
                })
                .collect();
            format!(
                "<h3>{}</h3><table><tr><th>Member</th><th>Booked on</th><th>Status</th><th></th></tr>{rows}</table>",
                escape(&class_label(class))
            )
        })
        .collect();

    if sections.is_empty() {
        sections
    } else {
        format!("<h2>Bookings</h2>{sections}")
    }
}

fn class_form(trainers: &[Trainer], today: NaiveDate) -> String {
    if trainers.is_empty() {
        return "<p>Register a trainer before adding classes.</p>".to_string();
    }

    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    let trainer_options = layout::options(
        trainers.iter().map(|t| (t.id.to_string(), t.name.as_str())),
        None,
    );

    format!(
        "<h2>Add a class</h2><form method=\"post\" action=\"{PATH}\"><fieldset>\
         <label>Class name <input name=\"class_name\" required></label>\
         <label>Trainer <select name=\"trainer_id\">{trainer_options}</select></label>\
         <label>Date <input name=\"date\" type=\"date\" value=\"{tomorrow}\"></label>\
         <label>Time <input name=\"time\" type=\"time\" value=\"10:00\"></label>\
         <label>Duration (min) <input name=\"duration\" type=\"number\" min=\"30\" max=\"180\" value=\"60\"></label>\
         <label>Capacity <input name=\"max_capacity\" type=\"number\" min=\"1\" max=\"30\" value=\"10\"></label>\
         <button type=\"submit\">Add class</button></fieldset></form>"
    )
}

async fn schedule(db: &Database, req: &CreateClassRequest) -> Result<GymClass, WebError> {
    req.validate()?;
    Ok(services::schedule_class(db.pool(), req).await?)
}

pub async fn create(
    State(db): State<Database>,
    form: Result<Form<CreateClassRequest>, FormRejection>,
) -> Redirect {
    let result = match form {
        Ok(Form(req)) => schedule(&db, &req).await,
        Err(rejection) => Err(WebError::BadRequest(rejection.body_text())),
    };

    layout::after_submit(PATH, result, Flash::ClassCreated)
}

pub async fn delete(State(db): State<Database>, Path(id): Path<i64>) -> Redirect {
    let result = services::delete_class(db.pool(), id)
        .await
        .map_err(WebError::from);

    layout::after_submit(PATH, result, Flash::ClassDeleted)
}

pub async fn book(
    State(db): State<Database>,
    form: Result<Form<BookingForm>, FormRejection>,
) -> Redirect {
    let result = match form {
        Ok(Form(req)) => {
            services::book_class(db.pool(), req.class_id, req.member_id, crate::today())
                .await
                .map_err(WebError::from)
        }
        Err(rejection) => Err(WebError::BadRequest(rejection.body_text())),
    };

    layout::after_submit(PATH, result, Flash::Booked)
}

pub async fn cancel(State(db): State<Database>, Path(id): Path<i64>) -> Redirect {
    let result = services::cancel_booking(db.pool(), id)
        .await
        .map_err(WebError::from);

    layout::after_submit(PATH, result, Flash::BookingCancelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, date: NaiveDate) -> ClassListing {
        ClassListing {
            id,
            class_name: "Morning yoga".to_string(),
            trainer_id: 1,
            trainer_name: "Coach Lee".to_string(),
            date,
            time: "07:00".to_string(),
            duration: 60,
            max_capacity: 15,
            current_bookings: 2,
            available_spots: 13,
        }
    }

    #[test]
    fn test_every_class_gets_a_delete_action() {
        let html = all_classes_table(&[
            listing(4, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()),
            listing(2, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()),
        ]);

        assert!(html.contains("action=\"/classes/4/delete\""));
        assert!(html.contains("action=\"/classes/2/delete\""));
        assert!(html.contains("2026-09-01"));
    }

    #[test]
    fn test_upcoming_table_has_no_delete_action() {
        let html = class_table(&[listing(4, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())]);
        assert!(!html.contains("/delete"));
        assert!(html.contains("2/15"));
    }
}
