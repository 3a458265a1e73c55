use crate::{
    controllers::list::{DELETE_PROMPT, ListController},
    data::{IdForm, RecordStore, student::StudentId},
    error::{MissingStudentSnafu, RollbookResult},
    maud_conveniences::{DANGER_BUTTON, SECONDARY_BUTTON, render_table, title},
    routes::index::render_app,
    state::RollbookState,
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::json;
use snafu::OptionExt;

fn id_vals(id: &StudentId) -> String {
    json!({ "id": id }).to_string()
}

fn delete_vals(id: &StudentId, confirmed: bool) -> String {
    json!({ "id": id, "confirmed": confirmed }).to_string()
}

pub fn render_list(list: &ListController, status: Markup) -> Markup {
    html! {
        div class="flex flex-row items-center justify-between mb-4" {
            (title("Student Records"))
            button class=(SECONDARY_BUTTON) hx-post="/view/form" hx-target="#app" hx-swap="outerHTML" {
                "← Back to Form"
            }
        }

        (status)

        input type="search" name="search" value=(list.search())
            placeholder="Search by name, roll no, age, or course..."
            hx-get="/internal/students/search" hx-trigger="input changed delay:300ms, search"
            hx-target="#student_records" hx-swap="outerHTML"
            class="shadow appearance-none border rounded w-full py-2 px-3 mb-4 leading-tight focus:outline-none bg-gray-700 border-gray-600" {}

        (render_records(list))
    }
}

/// Count plus table; the part the search box refreshes.
pub fn render_records(list: &ListController) -> Markup {
    let visible = list.visible_records();
    let noun = if visible.len() == 1 { "student" } else { "students" };

    html! {
        div id="student_records" {
            p class="text-gray-400 mb-2" {(visible.len()) " " (noun) " found"}

            @if list.is_busy() {
                p class="text-center py-8" {"Loading students..."}
            } @else {
                (render_table(
                    ["Name", "Age", "Roll Number", "Course", "Actions"],
                    visible.into_iter().map(|student| {
                        (
                            student.id.to_string(),
                            [
                                html! { (student.fields.name) },
                                html! { (student.fields.age) },
                                html! { (student.fields.roll_no) },
                                html! { (student.fields.course) },
                                render_actions(&student.id),
                            ],
                        )
                    }),
                    html! {
                        p class="text-lg" {"No students found"}
                        small {"Try adjusting your search terms"}
                    },
                ))
            }
        }
    }
}

fn render_actions(id: &StudentId) -> Markup {
    html! {
        div class="flex flex-row space-x-2" {
            button class=(SECONDARY_BUTTON) hx-post="/internal/students/edit" hx-vals=(id_vals(id)) hx-target="#app" hx-swap="outerHTML" {
                "Edit"
            }
            button class=(DANGER_BUTTON) hx-get="/internal/students/confirm_delete" hx-vals=(id_vals(id)) hx-target="closest div" hx-swap="outerHTML" {
                "Delete"
            }
        }
    }
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    search: String,
}

pub async fn internal_get_search<S: RecordStore>(
    State(state): State<RollbookState<S>>,
    Query(SearchQuery { search }): Query<SearchQuery>,
) -> Markup {
    let mut app = state.app().await;
    app.set_search(search);
    render_records(app.list())
}

pub async fn internal_post_edit<S: RecordStore>(
    State(state): State<RollbookState<S>>,
    Form(IdForm { id }): Form<IdForm>,
) -> RollbookResult<Markup> {
    let mut app = state.app().await;
    app.edit(&id)?;
    Ok(render_app(&app))
}

/// Inline yes/no in place of the row's buttons. Only a "yes" deletes.
pub async fn internal_get_confirm_delete<S: RecordStore>(
    State(state): State<RollbookState<S>>,
    Query(IdForm { id }): Query<IdForm>,
) -> RollbookResult<Markup> {
    let app = state.app().await;
    let student = app
        .list()
        .find(&id)
        .context(MissingStudentSnafu { id: id.clone() })?;

    Ok(html! {
        div class="flex flex-col space-y-2" role="alertdialog" {
            p {(DELETE_PROMPT)}
            p class="text-gray-400 text-sm" {(student.fields.name)}
            div class="flex flex-row space-x-2" {
                button class=(DANGER_BUTTON) hx-delete="/students" hx-vals=(delete_vals(&id, true)) hx-target="#app" hx-swap="outerHTML" {
                    "Yes, delete"
                }
                button class=(SECONDARY_BUTTON) hx-delete="/students" hx-vals=(delete_vals(&id, false)) hx-target="#app" hx-swap="outerHTML" {
                    "No"
                }
            }
        }
    })
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    id: StudentId,
    #[serde(default)]
    confirmed: bool,
}

pub async fn delete_student<S: RecordStore>(
    State(state): State<RollbookState<S>>,
    Query(DeleteQuery { id, confirmed }): Query<DeleteQuery>,
) -> Markup {
    let app = state.delete(&id, &confirmed).await;
    render_app(&app)
}
