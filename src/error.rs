use crate::data::{StoreOperation, student::StudentId};
use axum::{
    http::{StatusCode, uri::InvalidUri},
    response::{IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;

pub type RollbookResult<T> = Result<T, RollbookError>;

/// Anything that goes wrong talking to the remote collection. Callers never
/// branch on the variant, they only show a banner.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TransportError {
    #[snafu(display("Error sending {operation} request"))]
    SendRequest {
        source: reqwest::Error,
        operation: StoreOperation,
    },
    #[snafu(display("Remote store answered {operation} with {status}"))]
    RemoteStatus {
        status: reqwest::StatusCode,
        operation: StoreOperation,
    },
    #[snafu(display("Unable to decode {operation} response"))]
    DecodeResponse {
        source: reqwest::Error,
        operation: StoreOperation,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RollbookError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse remote store URL {:?}", original))]
    ParseApiBase {
        source: InvalidUri,
        original: String,
    },
    #[snafu(display("Remote store URL {:?} must be absolute http(s)", original))]
    RelativeApiBase { original: String },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: StudentId },
}

impl IntoResponse for RollbookError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found

        let basic_error = |desc: String| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Rollbook Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. } => ISE,
            Self::ParseApiBase { .. } | Self::RelativeApiBase { .. } => ISE,
            Self::MissingStudent { .. } => NF,
        };

        error!(?self, "Error!");
        (status_code, basic_error(self.to_string())).into_response()
    }
}
