//! Engine - owns the application state, the message channel and the gateway
//!
//! Frontends (the TUI runner, tests) drive the engine; nothing reaches the
//! gateway or the state through globals.

use std::sync::Arc;

use lumadeck_gateway::DeviceGateway;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::state::AppState;

/// Capacity of the message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Lumadeck.
pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel.
    msg_rx: mpsc::Receiver<Message>,

    gateway: Arc<G>,
}

impl<G> Engine<G>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    pub fn new(settings: Settings, gateway: Arc<G>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            gateway,
        }
    }

    /// Kick off the roster fetch
    pub fn start(&mut self) {
        self.process_message(Message::LoadDevices);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.gateway);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task or input source.
    ///
    /// The engine keeps a sender alive, so this only returns `None` if the
    /// channel has been closed explicitly.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
