//! Password recovery (request a code) and reset (use it).

use dioxus::prelude::*;
use ui::actions;
use ui::components::Heading;
use ui::forms::{Form, FormField, FormValues};
use ui::workflow::ActionState;
use ui::{push_error, push_success, use_api, use_toasts};

use crate::Route;

#[component]
pub fn PasswordRecovery() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut state = use_signal(ActionState::default);

    let handle_recover = move |values: FormValues| {
        let client = client.clone();
        if !state.write().try_begin() {
            return;
        }
        spawn(async move {
            match actions::recover_password(&client, &values).await {
                Ok(()) => {
                    state.set(ActionState::Succeeded);
                    push_success(&mut toasts, "Password reset code sent, check your email");
                    nav.push(Route::PasswordReset {});
                }
                Err(e) => {
                    let message = e.user_message();
                    push_error(&mut toasts, &message);
                    state.set(ActionState::Failed(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            Heading { title: "Password Recovery" }
            Form {
                heading: "Enter the email you registered with",
                fields: vec![FormField::email("email", "Email")],
                submit_label: "Send reset code",
                busy: state.read().is_loading(),
                on_submit: handle_recover,
            }
            div {
                class: "auth-links",
                Link { to: Route::PasswordReset {}, "Already have a code? Click here to reset your password" }
                Link { to: Route::Login {}, "Back to login" }
            }
        }
    }
}

#[component]
pub fn PasswordReset() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut state = use_signal(ActionState::default);

    let handle_reset = move |values: FormValues| {
        let client = client.clone();
        if !state.write().try_begin() {
            return;
        }
        spawn(async move {
            match actions::reset_password(&client, &values).await {
                Ok(()) => {
                    state.set(ActionState::Succeeded);
                    push_success(&mut toasts, "Password successfully reset");
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    let message = e.user_message();
                    push_error(&mut toasts, &message);
                    state.set(ActionState::Failed(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            Heading { title: "Password Reset" }
            Form {
                heading: "Enter reset code and new password",
                fields: vec![
                    FormField::text("passwordResetCode", "Password reset code"),
                    FormField::password("newPassword", "New password"),
                    FormField::password("confirmNewPassword", "Confirm new password"),
                ],
                submit_label: "Reset password",
                busy: state.read().is_loading(),
                on_submit: handle_reset,
            }
        }
    }
}
