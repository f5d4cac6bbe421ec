use axum::{
    Form,
    extract::{Path, Query, State, rejection::FormRejection},
    response::Redirect,
};
use storage::{
    Database,
    dto::trainer::{CreateTrainerRequest, SPECIALTIES},
    models::Trainer,
};
use validator::Validate;

use super::{
    PageQuery, PageResult,
    layout::{self, Flash, escape},
};
use crate::{error::WebError, features::trainers::services};

const PATH: &str = "/trainers";

pub async fn page(State(db): State<Database>, Query(query): Query<PageQuery>) -> PageResult {
    let trainers = services::list_trainers(db.pool(), None).await?;

    let body = format!(
        "<h2>Trainers ({})</h2>{}{}",
        trainers.len(),
        trainer_table(&trainers),
        register_form()
    );

    Ok(layout::page("Trainers", PATH, query.flash, &body))
}

fn trainer_table(trainers: &[Trainer]) -> String {
    if trainers.is_empty() {
        return "<p>No trainers registered.</p>".to_string();
    }

    let rows: String = trainers
        .iter()
        .map(|t| {
            let action = if t.status.is_active() {
                layout::post_button(&format!("{PATH}/{}/deactivate", t.id), "Deactivate")
            } else {
                String::new()
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} years</td><td>{:.1}</td>\
                 <td>{}</td><td>{action}</td></tr>",
                t.id,
                escape(&t.name),
                escape(&t.specialty),
                t.experience_years,
                t.rating,
                t.status.label(),
            )
        })
        .collect();

    format!(
        "<table><tr><th>ID</th><th>Name</th><th>Specialty</th><th>Experience</th>\
         <th>Rating</th><th>Status</th><th></th></tr>{rows}</table>"
    )
}

fn register_form() -> String {
    let specialties = layout::options(SPECIALTIES.iter().map(|s| (s.to_string(), *s)), None);

    format!(
        "<h2>Register a trainer</h2><form method=\"post\" action=\"{PATH}\"><fieldset>\
         <label>Name <input name=\"name\" required></label>\
         <label>Specialty <select name=\"specialty\">{specialties}</select></label>\
         <label>Experience (years) <input name=\"experience_years\" type=\"number\" min=\"0\" max=\"30\" value=\"1\"></label>\
         <label>Rating <input name=\"rating\" type=\"number\" min=\"1\" max=\"5\" step=\"0.1\" value=\"4.5\"></label>\
         <button type=\"submit\">Register</button></fieldset></form>"
    )
}

async fn register_trainer(db: &Database, req: &CreateTrainerRequest) -> Result<Trainer, WebError> {
    req.validate()?;
    Ok(services::register_trainer(db.pool(), req).await?)
}

pub async fn register(
    State(db): State<Database>,
    form: Result<Form<CreateTrainerRequest>, FormRejection>,
) -> Redirect {
    let result = match form {
        Ok(Form(req)) => register_trainer(&db, &req).await,
        Err(rejection) => Err(WebError::BadRequest(rejection.body_text())),
    };

    layout::after_submit(PATH, result, Flash::TrainerRegistered)
}

pub async fn deactivate(State(db): State<Database>, Path(id): Path<i64>) -> Redirect {
    let result = services::deactivate_trainer(db.pool(), id)
        .await
        .map_err(WebError::from);

    layout::after_submit(PATH, result, Flash::TrainerDeactivated)
}
