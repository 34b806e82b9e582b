//! End-to-end submission flows: app → reducer → worker → outcome.

mod common;

use authgate::auth::AuthToken;
use authgate::routes::Route;
use authgate::ui::form::{FormField, FormIntent, FormMode};
use common::{instant_service, make_app, WorkerHarness, DEMO_TOKEN};

fn set(app: &mut authgate::ui::app::App, field: FormField, value: &str) {
    app.dispatch_form(FormIntent::SetField {
        field,
        value: value.to_string(),
    });
}

#[test]
fn login_with_demo_credentials_resolves_a_token() {
    let mut app = make_app(Route::Login);
    let harness = WorkerHarness::spawn(instant_service(), &mut app);

    set(&mut app, FormField::Email, "user@example.com");
    set(&mut app, FormField::Password, "password");
    app.submit();
    assert!(app.form().is_loading);

    harness.pump_outcome(&mut app);
    assert_eq!(app.route(), Route::Dashboard);
    assert!(app.form().submission_error.is_none());
    assert_eq!(app.session_token().map(AuthToken::as_str), Some(DEMO_TOKEN));
}

#[test]
fn login_with_wrong_credentials_sets_the_banner() {
    let mut app = make_app(Route::Login);
    let harness = WorkerHarness::spawn(instant_service(), &mut app);

    set(&mut app, FormField::Email, "wrong@example.com");
    set(&mut app, FormField::Password, "password");
    app.submit();

    harness.pump_outcome(&mut app);
    assert_eq!(app.route(), Route::Login);
    assert_eq!(
        app.form().submission_error.as_deref(),
        Some("Invalid credentials")
    );
    assert!(!app.form().is_loading);
    assert!(app.session_token().is_none());
}

#[test]
fn register_with_valid_fields_resolves_a_token() {
    let mut app = make_app(Route::Register);
    let harness = WorkerHarness::spawn(instant_service(), &mut app);

    set(&mut app, FormField::Name, "Ann");
    set(&mut app, FormField::Email, "a@b.com");
    set(&mut app, FormField::Password, "secret1");
    app.submit();
    assert!(app.form().is_loading);

    harness.pump_outcome(&mut app);
    assert_eq!(app.route(), Route::Dashboard);
    assert_eq!(app.session_token().map(AuthToken::as_str), Some(DEMO_TOKEN));
}

#[test]
fn invalid_form_sends_nothing_to_the_worker() {
    let mut app = make_app(Route::Login);
    let harness = WorkerHarness::spawn(instant_service(), &mut app);

    app.submit();
    assert!(!app.form().is_loading);
    assert!(app.form().validation_errors.email.is_some());
    assert!(
        harness
            .events
            .recv_timeout(std::time::Duration::from_millis(100))
            .is_err(),
        "no outcome should arrive for an aborted submit"
    );
}

#[test]
fn failed_login_recovers_by_resubmitting() {
    let mut app = make_app(Route::Login);
    let harness = WorkerHarness::spawn(instant_service(), &mut app);

    set(&mut app, FormField::Email, "wrong@example.com");
    set(&mut app, FormField::Password, "password");
    app.submit();
    harness.pump_outcome(&mut app);
    assert!(app.form().submission_error.is_some());

    // Fix the email and resubmit manually; no retry logic exists.
    set(&mut app, FormField::Email, "user@example.com");
    app.submit();
    assert!(app.form().submission_error.is_none());
    harness.pump_outcome(&mut app);
    assert_eq!(app.route(), Route::Dashboard);
}

#[test]
fn mode_switch_during_flight_is_refused() {
    let mut app = make_app(Route::Login);
    let harness = WorkerHarness::spawn(instant_service(), &mut app);

    set(&mut app, FormField::Email, "user@example.com");
    set(&mut app, FormField::Password, "password");
    app.submit();
    assert!(app.form().is_loading);

    app.toggle_mode();
    assert_eq!(app.form().mode, FormMode::Login);
    assert_eq!(app.route(), Route::Login);

    harness.pump_outcome(&mut app);
    assert_eq!(app.route(), Route::Dashboard);
}
