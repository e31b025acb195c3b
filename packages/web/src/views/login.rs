//! Login page.

use dioxus::prelude::*;
use ui::actions;
use ui::components::Heading;
use ui::forms::{Form, FormField, FormValues};
use ui::workflow::ActionState;
use ui::{push_success, use_session, use_toasts, SessionStatus};

use crate::Route;

fn login_fields() -> Vec<FormField> {
    vec![
        FormField::email("email", "Email"),
        FormField::password("password", "Password"),
    ]
}

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut state = use_signal(ActionState::default);

    // Already signed in: skip the form.
    let status_session = session.clone();
    use_effect(move || {
        if status_session.status() == SessionStatus::Active {
            nav.replace(Route::Home {});
        }
    });

    let handle_login = move |values: FormValues| {
        let mut session = session.clone();
        if !state.write().try_begin() {
            return;
        }
        spawn(async move {
            match actions::login(&session.client, &values).await {
                Ok(identity) => {
                    tracing::info!(subject = %identity.subject, "Signed in");
                    session.refresh();
                    state.set(ActionState::Succeeded);
                    push_success(&mut toasts, "Successfully logged in");
                    nav.replace(Route::Home {});
                }
                Err(e) => state.set(ActionState::Failed(actions::login_failure_message(&e))),
            }
        });
    };

    let error = state.read().error().map(str::to_string);
    let busy = state.read().is_loading();

    rsx! {
        div {
            class: "auth-page",
            Heading { title: "eUprava", subtitle: "Sign in to access the agency services" }

            if let Some(error) = error {
                div { class: "inline-error", "{error}" }
            }

            Form {
                heading: "Login",
                fields: login_fields(),
                submit_label: "Log in",
                busy,
                on_submit: handle_login,
            }

            div {
                class: "auth-links",
                Link { to: Route::Register {}, "Don't have an account? Click here to register" }
                Link { to: Route::PasswordRecovery {}, "Forgot your password? Click here to recover it" }
            }
        }
    }
}
