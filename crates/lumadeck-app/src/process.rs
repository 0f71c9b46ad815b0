//! Message processing through the TEA loop

use std::sync::Arc;

use lumadeck_gateway::DeviceGateway;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up
/// messages and dispatching actions until the chain ends
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    gateway: &Arc<G>,
) where
    G: DeviceGateway + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), gateway.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
