//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use authgate::auth::{worker, AuthService, MockAuthService};
use authgate::config::{Config, ConfigStore};
use authgate::routes::Route;
use authgate::ui::app::App;
use authgate::ui::events::AppEvent;

pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "password";
pub const DEMO_TOKEN: &str = "mock-jwt-token";

pub fn make_app(entry: Route) -> App {
    let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
    App::new(config, entry)
}

pub fn instant_service() -> MockAuthService {
    MockAuthService::instant(DEMO_EMAIL, DEMO_PASSWORD, DEMO_TOKEN)
}

/// A runtime hosting the auth worker, wired the way the UI runtime wires
/// it: commands in over tokio mpsc, outcomes out over std mpsc.
pub struct WorkerHarness {
    pub runtime: tokio::runtime::Runtime,
    pub events: mpsc::Receiver<AppEvent>,
}

impl WorkerHarness {
    pub fn spawn<S: AuthService>(service: S, app: &mut App) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("failed to build runtime");
        let (cmd_tx, cmd_rx) = tokio::sync::mpsc::channel(4);
        let (event_tx, event_rx) = mpsc::channel();
        runtime.spawn(worker::run(cmd_rx, event_tx, service));
        app.set_auth_sender(cmd_tx);
        Self {
            runtime,
            events: event_rx,
        }
    }

    /// Wait for the next auth outcome and feed it back into the app,
    /// as the event loop would.
    pub fn pump_outcome(&self, app: &mut App) {
        let event = self
            .events
            .recv_timeout(Duration::from_secs(2))
            .expect("no outcome from worker");
        match event {
            AppEvent::AuthOutcome(outcome) => app.on_auth_outcome(outcome),
            _ => panic!("unexpected event from worker"),
        }
    }
}
