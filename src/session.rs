use crate::context::RequestScope;
use crate::database::Database;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Answer one request per input line until EOF or `shutdown` fires.
///
/// Blank lines are skipped. Each request gets its own scope tied to
/// `shutdown`, so a request still running when shutdown starts is refused by
/// storage instead of touching the table.
pub async fn run_session<R, W>(
    db: &Database,
    input: R,
    output: &mut W,
    timeout: Option<Duration>,
    shutdown: &CancellationToken,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    loop {
        let line = tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                debug!("session shut down");
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            debug!("input closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let scope = request_scope(shutdown, timeout);
        let reply = db.handle_query(&scope, &line).await;
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}

fn request_scope(shutdown: &CancellationToken, timeout: Option<Duration>) -> RequestScope {
    let scope = RequestScope::next().with_cancel(shutdown.child_token());
    match timeout {
        Some(timeout) => scope.with_timeout(timeout),
        None => scope,
    }
}
