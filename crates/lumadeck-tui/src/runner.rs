//! Main TUI runner - entry point and event loop

use lumadeck_app::signals;
use lumadeck_app::Engine;
use lumadeck_core::prelude::*;
use lumadeck_gateway::DeviceGateway;

use crate::terminal::TerminalSession;
use crate::{event, render};

/// Run the TUI against an engine until the user quits
pub async fn run<G>(mut engine: Engine<G>) -> Result<()>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    let mut session = TerminalSession::enter()?;

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(engine.msg_sender());

    engine.start();
    let result = run_loop(session.terminal(), &mut engine);
    drop(session);

    let counts = engine.state.devices.counts();
    info!(
        "Lumadeck exiting: {} devices, {} requests still in flight",
        counts.total, counts.in_flight
    );

    result
}

/// Main event loop
fn run_loop<G>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<G>) -> Result<()>
where
    G: DeviceGateway + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Completions from gateway calls and the signal handler
        engine.drain_pending();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll(event::TICK_RATE)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
