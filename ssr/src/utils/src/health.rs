use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Liveness probe for the page server, served at `/api/healthz`.
#[server(endpoint = "healthz", input = GetUrl)]
pub async fn healthz() -> Result<HealthStatus, ServerFnError> {
    Ok(HealthStatus {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
