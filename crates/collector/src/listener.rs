//! Listener domain — push delivery contract between a log source and a
//! consumer.
//!
//! Delivery is fire-and-forget: no return values or acknowledgements flow
//! back, and retry/backpressure is the source's responsibility. Ordering is
//! guaranteed only within a single source's batches.

use tokio::sync::mpsc;

use crate::record::LogRecord;

/// Consumer side of a log source.
///
/// A source calls `add_events` zero or more times with newly produced
/// records, in production order, then `source_closed` exactly once when the
/// source ends. Implementations must tolerate closure with no prior batches.
pub trait SourceListener: Send {
    fn add_events(&mut self, batch: Vec<LogRecord>);

    /// Terminal notification; no `add_events` calls follow. Release any
    /// per-source resources here.
    fn source_closed(&mut self);
}

/// A listener that drops all records.
///
/// Useful for measuring source overhead without a consumer, and for tests
/// that don't care about delivery.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl SourceListener for NoopListener {
    fn add_events(&mut self, _batch: Vec<LogRecord>) {}

    fn source_closed(&mut self) {}
}

/// Message forwarded by [`ChannelListener`].
#[derive(Debug)]
pub enum SourceMessage {
    Batch(Vec<LogRecord>),
    Closed,
}

/// Bridges a source to a consumer task over an unbounded channel.
///
/// The consumer end (a viewer, an aggregator) drains [`SourceMessage`]s at
/// its own pace. If the consumer hangs up, further batches are discarded
/// with a logged warning; delivery stays fire-and-forget.
pub struct ChannelListener {
    tx: mpsc::UnboundedSender<SourceMessage>,
}

impl ChannelListener {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SourceMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SourceListener for ChannelListener {
    fn add_events(&mut self, batch: Vec<LogRecord>) {
        if self.tx.send(SourceMessage::Batch(batch)).is_err() {
            tracing::warn!("consumer hung up, discarding batch");
        }
    }

    fn source_closed(&mut self) {
        let _ = self.tx.send(SourceMessage::Closed);
    }
}

/// Per-source wrapper enforcing the delivery contract.
///
/// `close` is idempotent and forwards the terminal notification exactly
/// once; batches delivered after close are dropped with a warning. Dropping
/// an open handle closes it, so a source that unwinds early still signals
/// its consumer.
pub struct SourceHandle<L: SourceListener> {
    listener: L,
    closed: bool,
}

impl<L: SourceListener> SourceHandle<L> {
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            closed: false,
        }
    }

    /// Forward a batch to the listener. Empty batches are skipped; the
    /// contract is one or more records per call.
    pub fn deliver(&mut self, batch: Vec<LogRecord>) {
        if self.closed {
            tracing::warn!(count = batch.len(), "batch delivered after close, dropping");
            return;
        }
        if batch.is_empty() {
            return;
        }
        self.listener.add_events(batch);
    }

    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.listener.source_closed();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<L: SourceListener> Drop for SourceHandle<L> {
    fn drop(&mut self) {
        self.close();
    }
}
