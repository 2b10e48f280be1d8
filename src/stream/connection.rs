//! Connection handle with close-on-drop semantics.

use super::{StreamEvent, StreamEventKind};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Monotonic identifier assigned by the session to each connection.
pub type ConnectionId = u64;

/// Owned handle to one in-flight stream.
///
/// Closing (or dropping) the handle marks the connection closed, so its task
/// stops forwarding immediately, and aborts the task.
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    closed: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl Connection {
    /// Spawn `run` as the connection task.
    ///
    /// `run` receives the [`EventSender`] it must use for every event.
    pub fn spawn<F, Fut>(
        id: ConnectionId,
        events: mpsc::UnboundedSender<StreamEvent>,
        run: F,
    ) -> Self
    where
        F: FnOnce(EventSender) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let closed = Arc::new(AtomicBool::new(false));
        let sender = EventSender {
            id,
            closed: Arc::clone(&closed),
            events,
        };
        let task = tokio::spawn(run(sender));
        Self { id, closed, task }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Observer that outlives the handle; used to verify teardown.
    pub fn watch(&self) -> ConnectionWatch {
        ConnectionWatch {
            closed: Arc::clone(&self.closed),
        }
    }

    /// Close the stream and release the handle.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!(connection = self.id, "closing stream connection");
        }
        self.task.abort();
    }
}

/// Read-only view of a connection's closed flag.
#[derive(Debug, Clone)]
pub struct ConnectionWatch {
    closed: Arc<AtomicBool>,
}

impl ConnectionWatch {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Event sink handed to a connection task.
#[derive(Debug)]
pub struct EventSender {
    id: ConnectionId,
    closed: Arc<AtomicBool>,
    events: mpsc::UnboundedSender<StreamEvent>,
}

impl EventSender {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Forward one event. Returns `false` once the connection is closed or
    /// the session is gone; the task should stop at that point.
    pub fn send(&self, kind: StreamEventKind) -> bool {
        if self.closed.load(Ordering::Acquire) {
            return false;
        }
        self.events
            .send(StreamEvent {
                connection: self.id,
                kind,
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dropping_connection_marks_it_closed_and_stops_sends() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (sender_tx, sender_rx) = tokio::sync::oneshot::channel();
        let connection = Connection::spawn(7, tx, move |sender| async move {
            let _ = sender_tx.send(sender);
            std::future::pending::<()>().await;
        });
        let sender = sender_rx.await.expect("task hands out its sender");
        let watch = connection.watch();

        assert!(sender.send(StreamEventKind::Opened));
        assert!(!watch.is_closed());

        connection.close();
        assert!(watch.is_closed());
        assert!(!sender.send(StreamEventKind::Message("late".into())));

        let first = rx.recv().await.expect("opened event");
        assert_eq!(first.connection, 7);
        assert!(matches!(first.kind, StreamEventKind::Opened));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn sends_fail_when_receiver_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let (sender_tx, sender_rx) = tokio::sync::oneshot::channel();
        let _connection = Connection::spawn(1, tx, move |sender| async move {
            let _ = sender_tx.send(sender);
        });
        let sender = sender_rx.await.expect("sender");
        assert_eq!(sender.id(), 1);
        assert!(!sender.send(StreamEventKind::Opened));
    }
}
