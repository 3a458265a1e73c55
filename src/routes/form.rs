use crate::{
    controllers::{App, form::FormController},
    data::{RecordStore, student::StudentField},
    maud_conveniences::{PRIMARY_BUTTON, SECONDARY_BUTTON, subtitle, text_input, title},
    routes::index::render_app,
    state::RollbookState,
};
use axum::{Form, extract::State, http::StatusCode};
use maud::{Markup, html};
use serde::Deserialize;

/// Whatever subset of the draft the browser sent: one field on change, all
/// four on submit.
#[derive(Deserialize)]
pub struct DraftForm {
    name: Option<String>,
    age: Option<String>,
    #[serde(rename = "rollNo")]
    roll_no: Option<String>,
    course: Option<String>,
}

impl DraftForm {
    fn apply(self, app: &mut App) {
        let Self {
            name,
            age,
            roll_no,
            course,
        } = self;

        for (field, value) in [
            (StudentField::Name, name),
            (StudentField::Age, age),
            (StudentField::RollNo, roll_no),
            (StudentField::Course, course),
        ] {
            if let Some(value) = value {
                app.update_field(field, value);
            }
        }
    }
}

pub async fn internal_post_form_field<S: RecordStore>(
    State(state): State<RollbookState<S>>,
    Form(draft): Form<DraftForm>,
) -> StatusCode {
    draft.apply(&mut *state.app().await);
    StatusCode::NO_CONTENT
}

pub async fn internal_post_form_submit<S: RecordStore>(
    State(state): State<RollbookState<S>>,
    Form(draft): Form<DraftForm>,
) -> Markup {
    let app = state.submit(|app| draft.apply(app)).await;
    render_app(&app)
}

pub async fn internal_post_form_cancel<S: RecordStore>(
    State(state): State<RollbookState<S>>,
) -> Markup {
    let mut app = state.app().await;
    app.cancel();
    render_app(&app)
}

pub fn render_form(form: &FormController, status: Markup) -> Markup {
    let editing = form.editing().is_some();
    let submit_label = if form.is_busy() {
        "Processing..."
    } else if editing {
        "Update Student"
    } else {
        "➕ Add Student"
    };

    html! {
        @if editing {
            (title("Update Student"))
            (subtitle("Modify student information"))
        } @else {
            (title("Add New Student"))
            (subtitle("Enter student details below"))
        }

        (status)

        form hx-post="/internal/form/submit" hx-target="#app" hx-swap="outerHTML" {
            div class="grid grid-cols-1 md:grid-cols-2 gap-x-6" {
                @for field in StudentField::ALL {
                    (text_input(
                        field.as_str(),
                        field.label(),
                        form.draft().get(field),
                        field.placeholder(),
                        form.errors().get(field),
                        "/internal/form/field",
                    ))
                }
            }

            div class="flex flex-row space-x-4" {
                button type="submit" class=(PRIMARY_BUTTON) disabled[form.is_busy()] {
                    (submit_label)
                }
                button type="button" class=(SECONDARY_BUTTON) hx-post="/internal/form/cancel" hx-target="#app" hx-swap="outerHTML" {
                    "✕ Cancel"
                }
            }
        }
    }
}
