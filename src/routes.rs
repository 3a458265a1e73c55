use crate::{
    data::RecordStore,
    routes::{
        form::{internal_post_form_cancel, internal_post_form_field, internal_post_form_submit},
        index::{get_index_route, internal_get_status, post_view_form, post_view_list},
        students::{
            delete_student, internal_get_confirm_delete, internal_get_search, internal_post_edit,
        },
    },
    state::RollbookState,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub mod form;
pub mod index;
pub mod students;

pub fn rollbook_router<S: RecordStore>(state: RollbookState<S>) -> Router {
    Router::new()
        .route("/", get(get_index_route::<S>))
        .route("/view/list", post(post_view_list::<S>))
        .route("/view/form", post(post_view_form::<S>))
        .route("/students", delete(delete_student::<S>))
        .route("/internal/status", get(internal_get_status::<S>))
        .route("/internal/form/field", post(internal_post_form_field::<S>))
        .route("/internal/form/submit", post(internal_post_form_submit::<S>))
        .route("/internal/form/cancel", post(internal_post_form_cancel::<S>))
        .route("/internal/students/search", get(internal_get_search::<S>))
        .route("/internal/students/edit", post(internal_post_edit::<S>))
        .route(
            "/internal/students/confirm_delete",
            get(internal_get_confirm_delete::<S>),
        )
        .with_state(state)
}
