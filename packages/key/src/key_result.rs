//! Concrete derivation result type

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use lockkey_common::NotResult;
use tokio::sync::oneshot;

use crate::error::{DerivationError, KdfError, Result, Stage};
use crate::record::DerivedKeyRecord;

/// Pending derivation running on a blocking thread
pub struct DerivedKeyResult {
    receiver: oneshot::Receiver<Result<DerivedKeyRecord>>,
}

/// Pending derivation with a user-defined result handler
pub struct DerivedKeyResultWithHandler<F> {
    receiver: oneshot::Receiver<Result<DerivedKeyRecord>>,
    handler: Option<F>,
}

fn task_dropped() -> DerivationError {
    DerivationError::new(
        Stage::KeyDerivation,
        KdfError::Backend("Derivation task dropped".to_string()),
    )
}

impl DerivedKeyResult {
    /// Create a `DerivedKeyResult` from a oneshot receiver
    pub(crate) fn new(receiver: oneshot::Receiver<Result<DerivedKeyRecord>>) -> Self {
        Self { receiver }
    }

    /// Create a `DerivedKeyResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<DerivedKeyRecord>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Resolve the result through `handler`, which decides what an error
    /// turns into
    pub fn on_result<F, T>(self, handler: F) -> DerivedKeyResultWithHandler<F>
    where
        F: FnOnce(Result<DerivedKeyRecord>) -> T,
        T: NotResult,
    {
        DerivedKeyResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
        }
    }
}

impl Future for DerivedKeyResult {
    type Output = Result<DerivedKeyRecord>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(task_dropped())),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for DerivedKeyResultWithHandler<F>
where
    F: FnOnce(Result<DerivedKeyRecord>) -> T + Unpin,
    T: NotResult,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // Already resolved; stay pending rather than panic on a second poll
        if this.handler.is_none() {
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(task_dropped()),
            Poll::Pending => return Poll::Pending,
        };

        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}
