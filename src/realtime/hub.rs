//! Fan-out of server events to live viewer connections.
//!
//! The hub owns a registry of per-connection unbounded channels. Broadcast
//! only enqueues on each channel, so delivery to N viewers never blocks the
//! mutating request, and a dead connection is pruned the next time a send
//! to it fails. There is no replay: a viewer only sees events broadcast
//! while it is subscribed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::events::ServerEvent;

pub type ConnectionId = usize;

type Registry = HashMap<ConnectionId, UnboundedSender<ServerEvent>>;

/// One hub instance per server; handed to services and the WebSocket
/// endpoint as an `Arc`, never a process-wide global.
#[derive(Default)]
pub struct BroadcastHub {
    connections: Mutex<Registry>,
    next_id: AtomicUsize,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a viewer. Returns its id and the receiving half the
    /// connection task drains.
    pub fn subscribe(&self) -> (ConnectionId, UnboundedReceiver<ServerEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry().insert(id, sender);
        log::debug!("viewer {id} connected");
        (id, receiver)
    }

    pub fn unsubscribe(&self, id: ConnectionId) {
        if self.registry().remove(&id).is_some() {
            log::debug!("viewer {id} disconnected");
        }
    }

    pub fn connection_count(&self) -> usize {
        self.registry().len()
    }

    /// Deliver `event` to every registered viewer. A failed send means the
    /// receiving task is gone; the connection is pruned and the failure is
    /// never surfaced to the caller.
    pub fn broadcast(&self, event: &ServerEvent) {
        let mut connections = self.registry();
        connections.retain(|id, sender| {
            let delivered = sender.send(event.clone()).is_ok();
            if !delivered {
                log::warn!("pruning dead viewer connection {id}");
            }
            delivered
        });
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // A poisoned registry still holds valid senders; keep serving.
        self.connections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
