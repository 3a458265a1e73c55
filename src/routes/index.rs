use crate::{
    controllers::{App, View},
    data::RecordStore,
    maud_conveniences::{SECONDARY_BUTTON, status_banner},
    routes::{form::render_form, students::render_list},
    state::RollbookState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route<S: RecordStore>(State(state): State<RollbookState<S>>) -> Markup {
    let app = state.app().await;
    state.render(render_app(&app))
}

/// Everything htmx swaps in and out. Every action handler answers with this.
pub fn render_app(app: &App) -> Markup {
    html! {
        main id="app" class="w-full max-w-5xl p-8 flex flex-col space-y-6" {
            header class="flex flex-row items-center justify-between" {
                h1 class="text-3xl font-semibold" {"STUDENT MANAGEMENT SYSTEM"}
                @if app.view() == View::Form {
                    button class=(SECONDARY_BUTTON) hx-post="/view/list" hx-target="#app" hx-swap="outerHTML" {
                        "View All Students →"
                    }
                }
            }

            div class="bg-gray-800 p-8 rounded shadow-md" {
                @match app.view() {
                    View::Form => {
                        (render_form(app.form(), render_status(app)))
                    }
                    View::List => {
                        (render_list(app.list(), render_status(app)))
                    }
                }
            }
        }
    }
}

pub fn render_status(app: &App) -> Markup {
    status_banner(app.status().current(), app.status().remaining())
}

pub async fn internal_get_status<S: RecordStore>(State(state): State<RollbookState<S>>) -> Markup {
    render_status(&*state.app().await)
}

pub async fn post_view_list<S: RecordStore>(State(state): State<RollbookState<S>>) -> Markup {
    let app = state.view_all().await;
    render_app(&app)
}

pub async fn post_view_form<S: RecordStore>(State(state): State<RollbookState<S>>) -> Markup {
    let mut app = state.app().await;
    app.back();
    render_app(&app)
}
