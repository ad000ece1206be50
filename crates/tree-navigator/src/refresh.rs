//! Hand-off of fresh snapshots from a background fetcher
//!
//! The fetcher owns a [`SnapshotSender`]; the UI thread polls the matching
//! [`SnapshotReceiver`] once per frame and applies whatever arrived. Only the
//! newest snapshot matters since each one fully replaces the previous.

use crate::tree::FlatNodeStore;
use anyhow::{anyhow, Result};
use flume::{Receiver, Sender, TryRecvError};
use log::{debug, trace};

/// Create a connected sender/receiver pair
pub fn refresh_channel() -> (SnapshotSender, SnapshotReceiver) {
    let (tx, rx) = flume::unbounded();
    (SnapshotSender { tx }, SnapshotReceiver { rx })
}

/// Producer half, cloneable and usable from any thread
#[derive(Debug, Clone)]
pub struct SnapshotSender {
    tx: Sender<FlatNodeStore>,
}

impl SnapshotSender {
    /// Queue a snapshot for the UI thread
    ///
    /// Fails only when the receiver has been dropped.
    pub fn send(&self, store: FlatNodeStore) -> Result<()> {
        self.tx
            .send(store)
            .map_err(|_| anyhow!("Snapshot receiver has been dropped"))
    }
}

/// Consumer half, polled from the UI thread
#[derive(Debug)]
pub struct SnapshotReceiver {
    rx: Receiver<FlatNodeStore>,
}

impl SnapshotReceiver {
    /// Drain pending snapshots without blocking and return the newest
    pub fn poll_latest(&self) -> Option<FlatNodeStore> {
        let mut latest = None;
        let mut superseded = 0usize;

        loop {
            match self.rx.try_recv() {
                Ok(store) => {
                    if latest.replace(store).is_some() {
                        superseded += 1;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    trace!("Snapshot sender disconnected");
                    break;
                }
            }
        }

        if superseded > 0 {
            debug!("Dropped {} superseded snapshots", superseded);
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeId, NodeRecord};
    use std::thread;

    fn store(root: &str) -> FlatNodeStore {
        FlatNodeStore::new(vec![NodeRecord::new(root)], Some(NodeId::from(root)))
    }

    #[test]
    fn test_poll_returns_newest() {
        let (tx, rx) = refresh_channel();
        assert!(rx.poll_latest().is_none());

        tx.send(store("a")).unwrap();
        tx.send(store("b")).unwrap();

        let latest = rx.poll_latest().unwrap();
        assert_eq!(latest.root(), Some(&NodeId::from("b")));
        assert!(rx.poll_latest().is_none());
    }

    #[test]
    fn test_send_from_other_thread() {
        let (tx, rx) = refresh_channel();
        let handle = thread::spawn(move || tx.send(store("remote")));
        handle.join().unwrap().unwrap();

        assert_eq!(rx.poll_latest().unwrap().root(), Some(&NodeId::from("remote")));
        // Sender is gone now; polling stays quiet
        assert!(rx.poll_latest().is_none());
    }

    #[test]
    fn test_send_after_receiver_dropped_fails() {
        let (tx, rx) = refresh_channel();
        drop(rx);
        assert!(tx.send(store("late")).is_err());
    }
}
