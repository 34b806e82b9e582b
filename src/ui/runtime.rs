use std::io;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::auth::{worker, MockAuthService};
use crate::config::ConfigStore;
use crate::routes::Route;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Depth of the auth command channel. One submission can be in flight
/// at a time, so this never fills in practice.
const AUTH_CHANNEL_DEPTH: usize = 4;

pub fn run(config: ConfigStore, entry: Route) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(config.clone(), entry);
    let events = EventHandler::new(tick_rate);

    // The UI loop stays synchronous; a small tokio runtime hosts the
    // auth worker, which talks back through the event channel.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;
    let (auth_tx, auth_rx) = mpsc::channel(AUTH_CHANNEL_DEPTH);
    let service = MockAuthService::from_config(&config.get());
    runtime.spawn(worker::run(auth_rx, events.sender(), service));
    app.set_auth_sender(auth_tx);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::AuthOutcome(outcome)) => app.on_auth_outcome(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
