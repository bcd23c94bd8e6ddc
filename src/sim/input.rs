//! Keyboard input state
//!
//! Platform callbacks never touch the simulation directly. They push
//! [`InputEvent`]s through an [`InputSender`], and the simulation drains the
//! channel into its [`InputState`] at the start of each update.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// A key edge reported by the platform, keyed by the platform's identifier
/// (e.g. `"ArrowUp"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(String),
    Released(String),
}

/// Current pressed flag per key. Entries are overwritten, never removed.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(key) => self.keys.insert(key, true),
            InputEvent::Released(key) => self.keys.insert(key, false),
        };
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }
}

/// Sending half of the input channel, handed to platform event handlers
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

impl InputSender {
    pub fn press(&self, key: impl Into<String>) {
        self.send(InputEvent::Pressed(key.into()));
    }

    pub fn release(&self, key: impl Into<String>) {
        self.send(InputEvent::Released(key.into()));
    }

    pub fn send(&self, event: InputEvent) {
        if let Err(e) = self.tx.send(event) {
            log::debug!("Input dropped, simulation gone: {:?}", e.0);
        }
    }
}

/// Receiving half, owned by the simulation
#[derive(Debug)]
pub(crate) struct InputReceiver {
    rx: Receiver<InputEvent>,
}

impl InputReceiver {
    /// Apply every pending event in arrival order (last write wins per key)
    pub(crate) fn drain_into(&self, state: &mut InputState) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    log::trace!("Input: {:?}", event);
                    state.apply(event);
                }
                // The simulation keeps its own sender alive, so Disconnected
                // cannot happen while `self` exists.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }
}

pub(crate) fn channel() -> (InputSender, InputReceiver) {
    let (tx, rx) = mpsc::channel();
    (InputSender { tx }, InputReceiver { rx })
}
