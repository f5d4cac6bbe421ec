use axum::extract::{Query, State};
use storage::{Database, dto::member::ExpiringMember};

use super::{PageQuery, PageResult, layout};
use crate::features::dashboard::services;

pub async fn page(State(db): State<Database>, Query(query): Query<PageQuery>) -> PageResult {
    let today = crate::today();
    let summary = services::summary(db.pool(), today).await?;

    let metrics = [
        ("Active members", summary.active_members),
        ("Active trainers", summary.active_trainers),
        ("Workouts today", summary.workouts_today),
        ("Upcoming classes", summary.upcoming_classes),
    ]
    .iter()
    .map(|(label, value)| format!("<div class=\"metric\">{label}<strong>{value}</strong></div>"))
    .collect::<String>();

    let body = format!(
        "<p>Today is {today}.</p><div class=\"metrics\">{metrics}</div>\
         <h2>Membership expiry</h2>{}",
        expiry_table(&summary.expiring_members)
    );

    Ok(layout::page("Dashboard", "/", query.flash, &body))
}

fn expiry_table(members: &[ExpiringMember]) -> String {
    if members.is_empty() {
        return "<p>No memberships expire in the next 7 days.</p>".to_string();
    }

    let rows: String = members
        .iter()
        .map(|m| {
            let note = if m.expired {
                "<span class=\"expired\">Expired</span>".to_string()
            } else {
                format!(
                    "<span class=\"warning\">Expires in {} day{}</span>",
                    m.days_left,
                    if m.days_left == 1 { "" } else { "s" }
                )
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{note}</td></tr>",
                layout::escape(&m.name),
                layout::escape(&m.email),
                m.end_date
            )
        })
        .collect();

    format!(
        "<table><tr><th>Name</th><th>Email</th><th>End date</th><th></th></tr>{rows}</table>"
    )
}
