//! Async worker bridging the sync UI loop and the auth service.
//!
//! The UI sends [`AuthCommand`]s over a tokio channel; the worker drives
//! the service call and delivers the outcome back to the event loop as an
//! [`AppEvent`]. Commands are processed one at a time, matching the UI
//! invariant that only a single submission can be in flight.

use std::sync::mpsc;

use tokio::sync::mpsc as tokio_mpsc;

use crate::auth::{AuthError, AuthService, AuthToken};
use crate::ui::events::AppEvent;

/// Submission request carried from the form to the service.
#[derive(Debug, Clone)]
pub enum AuthCommand {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
    },
}

pub type AuthCommandSender = tokio_mpsc::Sender<AuthCommand>;

/// Run the worker until the command channel closes.
pub async fn run<S: AuthService>(
    mut commands: tokio_mpsc::Receiver<AuthCommand>,
    events: mpsc::Sender<AppEvent>,
    service: S,
) {
    while let Some(command) = commands.recv().await {
        let outcome = execute(&service, command).await;
        if events.send(AppEvent::AuthOutcome(outcome)).is_err() {
            // UI loop is gone; nothing left to deliver to.
            break;
        }
    }
}

async fn execute<S: AuthService>(
    service: &S,
    command: AuthCommand,
) -> Result<AuthToken, AuthError> {
    match command {
        AuthCommand::Login { email, password } => service.login(&email, &password).await,
        AuthCommand::Register {
            name,
            email,
            password,
        } => service.register(&name, &email, &password).await,
    }
}
