//! The single channel the watch loop blocks on

use std::sync::mpsc::{channel, Receiver, Sender};

/// Message delivered to the watch loop.
#[derive(Debug)]
pub(crate) enum Signal {
    Fs(notify::Result<notify::Event>),
    Shutdown,
}

/// Filesystem events and shutdown requests share one queue, so the loop can
/// block without a timeout and still stop promptly.
#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<Signal>,
    rx: Receiver<Signal>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// A cloneable handle that stops the loop consuming this queue.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: self.tx.clone(),
        }
    }

    /// Hand the sender to the event source. The queue keeps no sender of its
    /// own, so the receiver disconnects once the watcher and every shutdown
    /// handle are dropped.
    pub(crate) fn into_parts(self) -> (Sender<Signal>, Receiver<Signal>) {
        (self.tx, self.rx)
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Requests a graceful stop of [`Segregator::run`](super::Segregator::run).
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: Sender<Signal>,
}

impl ShutdownHandle {
    /// Safe to call from a signal handler thread, and more than once.
    pub fn request(&self) {
        let _ = self.tx.send(Signal::Shutdown);
    }
}
