//! GitHub webhook → deployment script.
//!
//! DESIGN
//! ======
//! A push to `refs/heads/<branch>` of `<owner>/<repo>` looks up
//! `"<owner>/<repo>#<branch>"` in the deploy table. A hit spawns the script
//! detached, from the script's own directory, and the webhook is answered
//! immediately; the script's exit status only reaches the log.
//!
//! The payload is decoded after the event header is checked, because GitHub
//! `ping` deliveries carry no `ref`.

use std::path::Path;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::state::AppState;

const EVENT_HEADER: &str = "X-GitHub-Event";
const BRANCH_REF_PREFIX: &str = "refs/heads/";

#[derive(Deserialize, Debug, ToSchema)]
pub struct WebhookPayload {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub repository: Repository,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct Repository {
    pub full_name: String,
}

/// `POST /api/deploy`
#[utoipa::path(
    post,
    path = "/api/deploy",
    request_body = WebhookPayload,
    params(("X-GitHub-Event" = Option<String>, Header, description = "`ping` deliveries are acknowledged and ignored")),
    responses(
        (status = 200, description = "Payload accepted; matching script started", body = String),
        (status = 400, description = "Payload is not a GitHub push event"),
        (status = 401, description = "Missing or wrong token")
    )
)]
pub async fn handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    if headers.get(EVENT_HEADER).is_some_and(|event| event == "ping") {
        info!("received github ping event");
        return StatusCode::OK.into_response();
    }

    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "invalid webhook payload");
            return (StatusCode::BAD_REQUEST, format!("invalid webhook payload: {e}")).into_response();
        }
    };

    let Some(key) = deploy_key(&payload) else {
        info!(git_ref = %payload.ref_name, "ignoring non-branch ref");
        return "ok".into_response();
    };

    let script = state.deploy.read().await.get(&key).map(|entry| entry.script.clone());
    match script {
        Some(script) => {
            info!(%key, %script, "matched deploy entry");
            spawn_script(script, key);
        }
        None => info!(%key, "no deploy entry"),
    }

    "ok".into_response()
}

/// `"<owner>/<repo>#<branch>"` for branch pushes, `None` for tags and others.
pub(crate) fn deploy_key(payload: &WebhookPayload) -> Option<String> {
    let branch = payload.ref_name.strip_prefix(BRANCH_REF_PREFIX)?;
    Some(format!("{}#{branch}", payload.repository.full_name))
}

/// Directory a script runs from. A bare file name runs from the current
/// directory; a path with no parent (`/`) has none.
pub(crate) fn script_dir(script: &str) -> Option<&Path> {
    let dir = Path::new(script).parent()?;
    Some(if dir.as_os_str().is_empty() { Path::new(".") } else { dir })
}

/// Run `sh -c <script>` from the script's directory on a detached task.
pub(crate) fn spawn_script(script: String, key: String) -> JoinHandle<()> {
    tokio::spawn(async move {
        let Some(dir) = script_dir(&script) else {
            error!(%script, %key, "deploy script has no parent directory");
            return;
        };
        info!(%script, %key, "running deploy script");
        let mut child = match Command::new("sh").arg("-c").arg(&script).current_dir(dir).spawn() {
            Ok(child) => child,
            Err(e) => {
                error!(error = %e, %script, %key, "failed to spawn deploy script");
                return;
            }
        };

        match child.wait().await {
            Ok(status) if status.success() => info!(%key, "deploy script succeeded"),
            Ok(status) => error!(%key, %status, "deploy script failed"),
            Err(e) => error!(error = %e, %key, "failed to wait for deploy script"),
        }
    })
}

#[cfg(test)]
#[path = "deploy_test.rs"]
mod tests;
