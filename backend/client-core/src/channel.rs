//! One-shot, two-stage notification channel.
//!
//! [`ResponsePublisher::open`] publishes `Loading` before returning, and
//! [`ResponsePublisher::settle`] consumes the publisher, so a channel can never
//! carry a second terminal state.

use crate::response_state::ResponseState;

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use log::debug;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Receiving half handed to the caller.
///
/// Yields `Loading`, then one terminal state, then `None`.
#[derive(Debug)]
pub struct ResponseChannel<T> {
    request_id: Uuid,
    operation: &'static str,
    receiver: mpsc::UnboundedReceiver<ResponseState<T>>,
}

impl<T> ResponseChannel<T> {
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Next state, or `None` once the channel is exhausted.
    pub async fn recv(&mut self) -> Option<ResponseState<T>> {
        self.receiver.recv().await
    }

    /// Skip `Loading` and wait for the terminal state.
    ///
    /// Returns `None` only if the publishing task was torn down before it
    /// settled, e.g. because the runtime shut down.
    pub async fn terminal(mut self) -> Option<ResponseState<T>> {
        while let Some(state) = self.recv().await {
            if state.is_terminal() {
                return Some(state);
            }
        }
        None
    }
}

impl<T> Stream for ResponseChannel<T> {
    type Item = ResponseState<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

/// Sending half, owned by the task that runs the request.
pub(crate) struct ResponsePublisher<T> {
    request_id: Uuid,
    operation: &'static str,
    sender: mpsc::UnboundedSender<ResponseState<T>>,
}

impl<T> ResponsePublisher<T> {
    /// Create a channel and publish `Loading` on it.
    pub(crate) fn open(operation: &'static str) -> (Self, ResponseChannel<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let request_id = Uuid::new_v4();

        let publisher = Self {
            request_id,
            operation,
            sender,
        };
        publisher.publish(ResponseState::Loading);

        let channel = ResponseChannel {
            request_id,
            operation,
            receiver,
        };

        (publisher, channel)
    }

    pub(crate) fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Publish the terminal state and close the channel.
    pub(crate) fn settle(self, state: ResponseState<T>) {
        debug_assert!(state.is_terminal(), "settle requires a terminal state");
        self.publish(state);
    }

    fn publish(&self, state: ResponseState<T>) {
        let kind = state.kind();
        if self.sender.send(state).is_err() {
            debug!(
                "[{}] {} observer gone, dropping {kind}",
                self.request_id, self.operation
            );
        }
    }
}
