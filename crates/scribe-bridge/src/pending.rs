//! The single outstanding "fetch current content" request.
//!
//! At most one request waits for the engine's `getContent` reply. A second
//! request while one is in flight is refused with
//! [`BridgeError::RequestInFlight`] instead of orphaning the first caller.
//! A request whose future was dropped no longer counts as in flight.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use scribe_common::{BridgeError, RequestId};
use tokio::sync::oneshot;

type Reply = Result<String, BridgeError>;

/// Resolves with the engine's content, exactly once.
///
/// Fails with [`BridgeError::ChannelClosed`] if the controller unmounts or
/// is dropped before the reply arrives. There is no timeout unless
/// [`with_timeout`](Self::with_timeout) is used.
#[derive(Debug)]
pub struct ContentRequest {
    id: RequestId,
    rx: oneshot::Receiver<Reply>,
}

impl ContentRequest {
    pub fn id(&self) -> &RequestId {
        &self.id
    }

    /// Wait at most `limit` for the reply.
    ///
    /// On timeout the request is dropped, which frees the controller's slot.
    pub async fn with_timeout(self, limit: Duration) -> Reply {
        tokio::time::timeout(limit, self)
            .await
            .unwrap_or(Err(BridgeError::Timeout(limit)))
    }
}

impl Future for ContentRequest {
    type Output = Reply;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(reply)) => Poll::Ready(reply),
            Poll::Ready(Err(_)) => Poll::Ready(Err(BridgeError::ChannelClosed)),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[derive(Debug)]
struct PendingContentRequest {
    id: RequestId,
    reply: oneshot::Sender<Reply>,
}

/// Holds the one pending continuation.
#[derive(Debug, Default)]
pub(crate) struct ContentSlot {
    pending: Option<PendingContentRequest>,
}

impl ContentSlot {
    /// Open a new request, or refuse if a live one is waiting.
    pub(crate) fn open(&mut self) -> Result<ContentRequest, BridgeError> {
        if let Some(current) = &self.pending {
            if !current.reply.is_closed() {
                return Err(BridgeError::RequestInFlight);
            }
            tracing::debug!(request_id = %current.id, "reclaiming abandoned content request");
        }

        let (tx, rx) = oneshot::channel();
        let id = RequestId::new();
        self.pending = Some(PendingContentRequest {
            id: id.clone(),
            reply: tx,
        });
        Ok(ContentRequest { id, rx })
    }

    /// Deliver a reply. Returns the id of the request it resolved, or
    /// `None` when nothing was waiting.
    pub(crate) fn resolve(&mut self, html: String) -> Option<RequestId> {
        let pending = self.pending.take()?;
        if pending.reply.send(Ok(html)).is_err() {
            tracing::debug!(request_id = %pending.id, "content reply arrived after caller gave up");
        }
        Some(pending.id)
    }

    /// Fail the waiting request, if any.
    pub(crate) fn fail(&mut self, err: BridgeError) -> Option<RequestId> {
        let pending = self.pending.take()?;
        let _ = pending.reply.send(Err(err));
        Some(pending.id)
    }

    /// Whether a caller is still waiting.
    pub(crate) fn is_waiting(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.reply.is_closed())
    }
}
