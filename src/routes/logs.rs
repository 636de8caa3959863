//! Streams recent pm2 output for a service.

use std::convert::Infallible;
use std::io;
use std::process::Stdio;

use axum::body::Body;
use axum::extract::Path;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use futures::{Stream, stream};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use crate::error::Error;

const PM2: &str = "pm2";

/// `GET /api/logs/{service}/{lines}`
#[utoipa::path(
    get,
    path = "/api/logs/{service}/{lines}",
    params(
        ("service" = String, Path, description = "pm2 process name"),
        ("lines" = u32, Path, description = "Number of trailing lines to replay")
    ),
    responses(
        (status = 200, description = "Streamed log lines", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or wrong token"),
        (status = 500, description = "pm2 could not be started")
    )
)]
pub async fn handler(Path((service, lines)): Path<(String, u32)>) -> Result<Response, Error> {
    let mut child = pm2_logs_command(&service, lines)
        .spawn()
        .map_err(|source| Error::Spawn { command: PM2, source })?;
    let stdout = child.stdout.take().ok_or(Error::NoStdout(PM2))?;

    tracing::info!(%service, lines, "streaming pm2 logs");

    // The child rides along with the stream so it is killed when the client goes away.
    let body = Body::from_stream(line_stream(stdout, child));
    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

pub(crate) fn pm2_logs_command(service: &str, lines: u32) -> Command {
    let mut cmd = Command::new(PM2);
    cmd.arg("logs")
        .arg("--lines")
        .arg(lines.to_string())
        .arg(service)
        .arg("--raw")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    cmd
}

/// Newline-terminated lines of `reader`. Lines that are not valid UTF-8 are
/// logged and dropped; any other read error ends the stream. `guard` is held
/// until the stream finishes or is dropped.
pub(crate) fn line_stream<R, G>(reader: R, guard: G) -> impl Stream<Item = Result<String, Infallible>>
where
    R: AsyncRead + Unpin,
{
    stream::unfold((BufReader::new(reader).lines(), guard), |(mut lines, guard)| async move {
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => return Some((Ok(format!("{line}\n")), (lines, guard))),
                Ok(None) => return None,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    tracing::warn!(error = %e, "dropping undecodable log line");
                }
                Err(e) => {
                    tracing::error!(error = %e, "log stream read failed");
                    return None;
                }
            }
        }
    })
}

#[cfg(test)]
#[path = "logs_test.rs"]
mod tests;
