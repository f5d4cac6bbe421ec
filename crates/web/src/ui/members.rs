use axum::{
    Form,
    extract::{Path, Query, State, rejection::FormRejection},
    response::Redirect,
};
use serde::Deserialize;
use storage::{
    Database,
    dto::member::CreateMemberRequest,
    models::{Member, MembershipType, Status},
};
use validator::Validate;

use super::{
    PageResult,
    layout::{self, Flash, escape},
};
use crate::{error::WebError, features::members::services};

const PATH: &str = "/members";

#[derive(Debug, Default, Deserialize)]
pub struct MembersQuery {
    pub flash: Option<Flash>,
    pub status: Option<Status>,
}

pub async fn page(State(db): State<Database>, Query(query): Query<MembersQuery>) -> PageResult {
    let members = services::list_members(db.pool(), query.status).await?;

    let filters = [("All", PATH.to_string())]
        .into_iter()
        .chain(
            [Status::Active, Status::Inactive]
                .into_iter()
                .map(|s| (s.label(), format!("{PATH}?status={}", s.as_str()))),
        )
        .map(|(label, href)| format!("<a href=\"{}\">{label}</a>", escape(&href)))
        .collect::<Vec<_>>()
        .join(" | ");

    let body = format!(
        "<h2>Members ({})</h2><p>{filters}</p>{}<h2>Register a member</h2>{}",
        members.len(),
        member_table(&members),
        register_form(crate::today())
    );

    let path = match query.status {
        Some(status) => format!("{PATH}?status={}", status.as_str()),
        None => PATH.to_string(),
    };

    Ok(layout::page("Members", &path, query.flash, &body))
}

fn member_table(members: &[Member]) -> String {
    if members.is_empty() {
        return "<p>No members registered.</p>".to_string();
    }

    let rows: String = members
        .iter()
        .map(|m| {
            let action = if m.status.is_active() {
                layout::post_button(&format!("{PATH}/{}/deactivate", m.id), "Deactivate")
            } else {
                String::new()
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td><td>{action}</td></tr>",
                m.id,
                escape(&m.name),
                escape(&m.email),
                escape(m.phone.as_deref().unwrap_or("")),
                m.membership_type,
                m.start_date,
                m.end_date,
                m.status.label(),
            )
        })
        .collect();

    format!(
        "<table><tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>Plan</th>\
         <th>Start</th><th>End</th><th>Status</th><th></th></tr>{rows}</table>"
    )
}

fn register_form(today: chrono::NaiveDate) -> String {
    let plans = layout::options(
        MembershipType::ALL.iter().map(|t| {
            (
                t.as_str().to_string(),
                match t {
                    MembershipType::General => "General (180 days)",
                    MembershipType::Premium => "Premium (365 days)",
                    MembershipType::Vip => "VIP (730 days)",
                },
            )
        }),
        Some(MembershipType::General.as_str()),
    );

    format!(
        "<form method=\"post\" action=\"{PATH}\"><fieldset>\
         <label>Name <input name=\"name\" required></label>\
         <label>Email <input name=\"email\" type=\"email\" required></label>\
         <label>Phone <input name=\"phone\"></label>\
         <label>Plan <select name=\"membership_type\">{plans}</select></label>\
         <label>Start date <input name=\"start_date\" type=\"date\" value=\"{today}\" required></label>\
         <button type=\"submit\">Register</button></fieldset></form>"
    )
}

async fn register_member(db: &Database, req: &CreateMemberRequest) -> Result<Member, WebError> {
    req.validate()?;
    Ok(services::register_member(db.pool(), req).await?)
}

pub async fn register(
    State(db): State<Database>,
    form: Result<Form<CreateMemberRequest>, FormRejection>,
) -> Redirect {
    let result = match form {
        Ok(Form(req)) => register_member(&db, &req).await,
        Err(rejection) => Err(WebError::BadRequest(rejection.body_text())),
    };

    layout::after_submit(PATH, result, Flash::MemberRegistered)
}

pub async fn deactivate(State(db): State<Database>, Path(id): Path<i64>) -> Redirect {
    let result = services::deactivate_member(db.pool(), id)
        .await
        .map_err(WebError::from);

    layout::after_submit(PATH, result, Flash::MemberDeactivated)
}
