use crate::auth::worker::AuthCommandSender;
use crate::auth::{AuthCommand, AuthError, AuthToken};
use crate::config::ConfigStore;
use crate::routes::Route;
use crate::ui::form::{FormIntent, FormMode, FormReducer, FormState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    /// Form screen state (MVI pattern).
    form: FormState,
    /// Token from the last successful authentication. Held in memory
    /// only; nothing here persists it.
    session_token: Option<AuthToken>,
    config: ConfigStore,
    auth_tx: Option<AuthCommandSender>,
}

impl App {
    pub fn new(config: ConfigStore, entry: Route) -> Self {
        let mode = entry.form_mode().unwrap_or(FormMode::Login);
        Self {
            should_quit: false,
            route: Route::for_mode(mode),
            form: FormState::for_mode(mode),
            session_token: None,
            config,
            auth_tx: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn session_token(&self) -> Option<&AuthToken> {
        self.session_token.as_ref()
    }

    pub fn oauth_url(&self) -> String {
        self.config.get().oauth.google_url
    }

    /// Attach the channel to the auth worker (called from the runtime).
    pub fn set_auth_sender(&mut self, sender: AuthCommandSender) {
        self.auth_tx = Some(sender);
    }

    pub fn on_tick(&mut self) {}

    /// Dispatch an intent to the form reducer.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Flip between Login and Register. The reducer clears all fields
    /// and errors, and refuses while a submission is in flight.
    pub fn toggle_mode(&mut self) {
        self.switch_mode(self.form.mode.toggled());
    }

    pub fn switch_mode(&mut self, mode: FormMode) {
        self.dispatch_form(FormIntent::SwitchMode(mode));
        self.route = Route::for_mode(self.form.mode);
    }

    /// Submit the form.
    ///
    /// The reducer revalidates; it only enters the loading state when
    /// every check passed. Only then is a command sent to the service
    /// worker, so an invalid form never produces a call.
    pub fn submit(&mut self) {
        if self.form.is_loading {
            return;
        }

        self.dispatch_form(FormIntent::Submit);
        if !self.form.is_loading {
            return;
        }

        let command = match self.form.mode {
            FormMode::Login => AuthCommand::Login {
                email: self.form.email.clone(),
                password: self.form.password.clone(),
            },
            FormMode::Register => AuthCommand::Register {
                name: self.form.name.clone(),
                email: self.form.email.clone(),
                password: self.form.password.clone(),
            },
        };

        if !self.send_command(command) {
            self.dispatch_form(FormIntent::SubmitFailed {
                message: "Authentication service unavailable".to_string(),
            });
        }
    }

    /// Handle the outcome of a pending submission.
    pub fn on_auth_outcome(&mut self, outcome: Result<AuthToken, AuthError>) {
        if !self.form.is_loading {
            // No submission in flight; stale outcome.
            tracing::debug!("dropping auth outcome with no pending submission");
            return;
        }

        match outcome {
            Ok(token) => {
                self.session_token = Some(token);
                self.dispatch_form(FormIntent::SubmitSucceeded);
                self.route = Route::Dashboard;
            }
            Err(err) => {
                self.dispatch_form(FormIntent::SubmitFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    fn send_command(&mut self, command: AuthCommand) -> bool {
        let Some(sender) = &self.auth_tx else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("auth command send failed: {}", err);
                false
            }
        }
    }
}
