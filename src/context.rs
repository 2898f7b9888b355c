use crate::error::{DbError, DbResult};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

static NEXT_TX_ID: AtomicI64 = AtomicI64::new(1);

/// Per-request state handed down through every layer of the pipeline.
///
/// Carries the transaction id used to tag log events and the signals that
/// end a request early: an explicit cancellation token and an optional
/// deadline. Layers below the database only read it.
#[derive(Debug, Clone)]
pub struct RequestScope {
    tx: i64,
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestScope {
    pub fn new(tx: i64) -> Self {
        RequestScope {
            tx,
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Allocate a scope with the next process-wide transaction id.
    pub fn next() -> Self {
        Self::new(NEXT_TX_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Tie this scope to an outer token, e.g. one cancelled on shutdown.
    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn tx_id(&self) -> i64 {
        self.tx
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// `Ok` while the request may still proceed.
    pub fn err(&self) -> DbResult<()> {
        if self.cancel.is_cancelled() {
            return Err(DbError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(DbError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
