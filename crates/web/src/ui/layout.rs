use axum::response::{Html, Redirect};
use serde::{Deserialize, Serialize};
use storage::error::StorageError;

use crate::error::WebError;

/// Outcome of a form submission, carried to the next page view as `?flash=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flash {
    MemberRegistered,
    MemberDeactivated,
    DuplicateEmail,
    WorkoutSaved,
    WorkoutDeleted,
    ClassCreated,
    ClassDeleted,
    Booked,
    ClassFull,
    BookingCancelled,
    TrainerRegistered,
    TrainerDeactivated,
    InvalidInput,
    NotFound,
    Rejected,
    Error,
}

impl Flash {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MemberRegistered => "member_registered",
            Self::MemberDeactivated => "member_deactivated",
            Self::DuplicateEmail => "duplicate_email",
            Self::WorkoutSaved => "workout_saved",
            Self::WorkoutDeleted => "workout_deleted",
            Self::ClassCreated => "class_created",
            Self::ClassDeleted => "class_deleted",
            Self::Booked => "booked",
            Self::ClassFull => "class_full",
            Self::BookingCancelled => "booking_cancelled",
            Self::TrainerRegistered => "trainer_registered",
            Self::TrainerDeactivated => "trainer_deactivated",
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::Rejected => "rejected",
            Self::Error => "error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MemberRegistered => "Member registered.",
            Self::MemberDeactivated => "Member deactivated.",
            Self::DuplicateEmail => "This email is already registered.",
            Self::WorkoutSaved => "Workout saved.",
            Self::WorkoutDeleted => "Workout deleted.",
            Self::ClassCreated => "Class added.",
            Self::ClassDeleted => "Class and its bookings deleted.",
            Self::Booked => "Booking confirmed.",
            Self::ClassFull => "This class is full.",
            Self::BookingCancelled => "Booking cancelled.",
            Self::TrainerRegistered => "Trainer registered.",
            Self::TrainerDeactivated => "Trainer deactivated.",
            Self::InvalidInput => "Please fill in every required field with a valid value.",
            Self::NotFound => "That record no longer exists.",
            Self::Rejected => "The selected member or trainer cannot be used for this.",
            Self::Error => "Something went wrong, please try again.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEmail
                | Self::ClassFull
                | Self::InvalidInput
                | Self::NotFound
                | Self::Rejected
                | Self::Error
        )
    }

    pub fn from_error(error: &WebError) -> Self {
        match error {
            WebError::Storage(StorageError::DuplicateEmail(_)) => Self::DuplicateEmail,
            WebError::Storage(StorageError::ClassFull { .. }) => Self::ClassFull,
            WebError::Storage(StorageError::NotFound) => Self::NotFound,
            WebError::Storage(StorageError::ConstraintViolation(_)) => Self::Rejected,
            WebError::Storage(_) => Self::Error,
            WebError::Validation(_) | WebError::BadRequest(_) => Self::InvalidInput,
        }
    }
}

/// Redirect back to `path` after a POST, reporting how it went.
pub fn after_submit<T>(path: &str, result: Result<T, WebError>, success: Flash) -> Redirect {
    let flash = match result {
        Ok(_) => success,
        Err(error) => {
            let flash = Flash::from_error(&error);
            if flash == Flash::Error {
                tracing::error!(%error, path, "Form submission failed");
            } else {
                tracing::warn!(%error, path, "Form submission rejected");
            }
            flash
        }
    };

    let separator = if path.contains('?') { '&' } else { '?' };
    Redirect::to(&format!("{path}{separator}flash={}", flash.as_str()))
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const NAV: [(&str, &str); 6] = [
    ("/", "Dashboard"),
    ("/members", "Members"),
    ("/workouts", "Workouts"),
    ("/classes", "Classes"),
    ("/trainers", "Trainers"),
    ("/analytics", "Analytics"),
];

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
nav { background: #1f2937; padding: 0.75rem 1.5rem; }
nav a { color: #d1d5db; margin-right: 1.25rem; text-decoration: none; }
nav a.active { color: #fff; font-weight: 600; }
main { padding: 1.5rem; max-width: 1100px; }
table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
th, td { border-bottom: 1px solid #e5e7eb; padding: 0.4rem 0.6rem; text-align: left; }
.flash { padding: 0.6rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
.flash.ok { background: #dcfce7; }
.flash.error { background: #fee2e2; }
.metrics { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
.metric { border: 1px solid #e5e7eb; border-radius: 6px; padding: 0.8rem 1.2rem; }
.metric strong { display: block; font-size: 1.6rem; }
.chart { margin-bottom: 2rem; }
.bar-row { display: flex; align-items: center; margin: 0.2rem 0; }
.bar-label { width: 12rem; }
.bar { background: #3b82f6; height: 1rem; margin-right: 0.5rem; }
.heatmap td { text-align: center; }
.warning { color: #b45309; }
.expired { color: #b91c1c; }
form.inline { display: inline; }
fieldset { margin-bottom: 1.5rem; }
label { display: block; margin: 0.3rem 0; }
"#;

/// Wrap a view body in the shared shell: navigation, flash banner and a
/// refresh link back to `path` (query string included).
pub fn page(title: &str, path: &str, flash: Option<Flash>, body: &str) -> Html<String> {
    let current = path.split('?').next().unwrap_or(path);
    let nav: String = NAV
        .iter()
        .map(|(href, label)| {
            let class = if *href == current { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();

    let banner = flash
        .map(|flash| {
            let kind = if flash.is_error() { "error" } else { "ok" };
            format!(
                "<div class=\"flash {kind}\">{}</div>",
                escape(flash.message())
            )
        })
        .unwrap_or_default();

    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} · Gym Management</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav>{nav}</nav>\n<main>\n<h1>{title}</h1>\n{banner}\n\
         <p><a href=\"{refresh}\">Refresh</a></p>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        refresh = escape(path),
    ))
}

/// `<option>` list; `selected` marks the matching value.
pub fn options<'a, I>(items: I, selected: Option<&str>) -> String
where
    I: IntoIterator<Item = (String, &'a str)>,
{
    items
        .into_iter()
        .map(|(value, label)| {
            let mark = if Some(value.as_str()) == selected {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{mark}>{}</option>",
                escape(&value),
                escape(label)
            )
        })
        .collect()
}

/// Single-button form posting to `action`.
pub fn post_button(action: &str, label: &str) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"{}\"><button type=\"submit\">{}</button></form>",
        escape(action),
        escape(label)
    )
}
