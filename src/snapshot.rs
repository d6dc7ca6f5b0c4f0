use crate::grid::Grid;
use std::sync::mpsc::{Receiver, SyncSender, TrySendError, sync_channel};

/// A copied field frame handed to an out-of-band observer.
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    pub frame: usize,
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl FieldSnapshot {
    pub fn of(field: &Grid, frame: usize) -> Self {
        Self {
            frame,
            width: field.width(),
            height: field.height(),
            data: field.as_slice().to_vec(),
        }
    }
}

/// One-way snapshot channel for advisory observers (plotting, logging).
///
/// The publisher copies the field and never blocks: if the consumer lags
/// behind the bounded queue, the frame is simply dropped. The observer sees a
/// possibly stale but never torn view, and the step loop never waits on it.
pub fn snapshot_channel(capacity: usize) -> (SnapshotPublisher, Receiver<FieldSnapshot>) {
    let (tx, rx) = sync_channel(capacity);
    (SnapshotPublisher { tx }, rx)
}

pub struct SnapshotPublisher {
    tx: SyncSender<FieldSnapshot>,
}

impl SnapshotPublisher {
    /// Publishes a copy of `field`. Returns whether the frame was accepted;
    /// a full queue or a hung-up consumer just means the frame is skipped.
    pub fn publish(&self, field: &Grid, frame: usize) -> bool {
        match self.tx.try_send(FieldSnapshot::of(field, frame)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }
}
