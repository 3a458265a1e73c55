use crate::error::{BadEnvVarSnafu, ParseApiBaseSnafu, RelativeApiBaseSnafu, RollbookResult};
use axum::http::Uri;
use dotenvy::var;
use snafu::{ResultExt, ensure};
use std::sync::Arc;

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_base: Arc<str>,
    server_ip: Arc<str>,
}

impl RuntimeConfiguration {
    pub fn new() -> RollbookResult<Self> {
        let api_base = var("ROLLBOOK_API_BASE").context(BadEnvVarSnafu {
            name: "ROLLBOOK_API_BASE",
        })?;
        let server_ip = var("ROLLBOOK_SERVER_IP").unwrap_or_else(|_| DEFAULT_SERVER_IP.to_string());

        Self::from_parts(api_base, server_ip)
    }

    pub fn from_parts(api_base: String, server_ip: String) -> RollbookResult<Self> {
        let uri: Uri = api_base.parse().context(ParseApiBaseSnafu {
            original: api_base.clone(),
        })?;
        ensure!(
            matches!(uri.scheme_str(), Some("http" | "https")) && uri.host().is_some(),
            RelativeApiBaseSnafu { original: api_base }
        );

        Ok(Self {
            api_base: api_base.into(),
            server_ip: server_ip.into(),
        })
    }

    /// URL of the remote student collection; all four verbs go here.
    pub fn api_base(&self) -> Arc<str> {
        self.api_base.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}
