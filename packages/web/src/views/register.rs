//! Registration for citizens and legal entities.

use api::models::Sex;
use dioxus::prelude::*;
use ui::actions;
use ui::components::{Button, ButtonVariant, Heading};
use ui::forms::{Form, FormField, FormValues};
use ui::workflow::ActionState;
use ui::{push_error, push_success, use_api, use_toasts};

use crate::Route;

fn address_and_account_fields() -> Vec<FormField> {
    vec![
        FormField::text("municipality", "Municipality"),
        FormField::text("locality", "Locality"),
        FormField::text("streetName", "Street Name"),
        FormField::number("streetNumber", "Street Number").with_range(0, 1000),
        FormField::email("email", "Email"),
        FormField::password("password", "Password"),
        FormField::password("passwordRepeat", "Repeat Password"),
    ]
}

fn person_fields() -> Vec<FormField> {
    let mut fields = vec![
        FormField::text("firstName", "First Name"),
        FormField::text("lastName", "Last Name"),
        FormField::radio("sex", "Sex", &Sex::OPTIONS),
        FormField::text("citizenship", "Citizenship"),
        FormField::date("dob", "Date of Birth"),
        FormField::text("jmbg", "JMBG"),
    ];
    fields.extend(address_and_account_fields());
    fields
}

fn legal_entity_fields() -> Vec<FormField> {
    let mut fields = vec![
        FormField::text("name", "Name"),
        FormField::text("citizenship", "Citizenship"),
        FormField::text("pib", "PIB"),
        FormField::text("mb", "MB"),
    ];
    fields.extend(address_and_account_fields());
    fields
}

#[component]
pub fn Register() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut as_person = use_signal(|| true);
    let mut state = use_signal(ActionState::default);

    let handle_register = move |values: FormValues| {
        let client = client.clone();
        if !state.write().try_begin() {
            return;
        }
        spawn(async move {
            let result = if as_person() {
                let today = chrono::Local::now().date_naive();
                actions::register_person(&client, &values, today).await
            } else {
                actions::register_legal_entity(&client, &values).await
            };
            match result {
                Ok(()) => {
                    state.set(ActionState::Succeeded);
                    push_success(&mut toasts, "Successfully registered");
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

    let mode = if as_person() { "person" } else { "legal-entity" };
    let fields = if as_person() { person_fields() } else { legal_entity_fields() };
    let busy = state.read().is_loading();

    rsx! {
        div {
            class: "auth-page",
            Heading { title: "Register" }

            Button {
                variant: ButtonVariant::Secondary,
                disabled: busy,
                onclick: move |_| as_person.toggle(),
                if as_person() { "Switch to legal entity form" } else { "Switch to person form" }
            }

            Form {
                key: "{mode}",
                fields,
                submit_label: "Register",
                busy,
                on_submit: handle_register,
            }

            div {
                class: "auth-links",
                Link { to: Route::Login {}, "Already have an account? Click here to login" }
            }
        }
    }
}
