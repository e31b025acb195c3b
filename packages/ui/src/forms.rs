//! # Field-driven forms
//!
//! Pages describe a form as an ordered list of [`FormField`]s and get back a
//! [`FormValues`] map keyed by field name when the user submits. The [`Form`]
//! component knows nothing about what the values mean; parsing and validation
//! happen in [`crate::actions`].
//!
//! | Kind | Rendered as | Value |
//! |------|-------------|-------|
//! | `Text`, `Email`, `Number`, `Password`, `Date`, `DateTime`, `File` | one `<input>` | [`FieldValue::Single`] |
//! | `Radio` | one radio button per option | [`FieldValue::Single`] (the chosen option) |
//! | `Checkbox` | one checkbox per option | [`FieldValue::Set`] (the ticked options) |

use std::collections::{BTreeMap, BTreeSet};

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Password,
    Date,
    DateTime,
    Radio,
    Checkbox,
    File,
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Password => "password",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime-local",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::File => "file",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub initial: Option<String>,
    pub options: Vec<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl FormField {
    pub fn new(kind: FieldKind, name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            initial: None,
            options: Vec::new(),
            min: None,
            max: None,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(FieldKind::Text, name, label)
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::new(FieldKind::Email, name, label)
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::new(FieldKind::Number, name, label)
    }

    pub fn password(name: &str, label: &str) -> Self {
        Self::new(FieldKind::Password, name, label)
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::new(FieldKind::Date, name, label)
    }

    pub fn datetime(name: &str, label: &str) -> Self {
        Self::new(FieldKind::DateTime, name, label)
    }

    pub fn radio(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(FieldKind::Radio, name, label).with_options(options)
    }

    pub fn checkbox(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(FieldKind::Checkbox, name, label).with_options(options)
    }

    pub fn file(name: &str, label: &str) -> Self {
        Self::new(FieldKind::File, name, label)
    }

    /// Initial value. For checkboxes, a comma-separated list of ticked options.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn with_range(mut self, min: impl ToString, max: impl ToString) -> Self {
        self.min = Some(min.to_string());
        self.max = Some(max.to_string());
        self
    }

    fn initial_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Checkbox => FieldValue::Set(
                self.initial
                    .as_deref()
                    .unwrap_or_default()
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => FieldValue::Single(self.initial.clone().unwrap_or_default()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    Set(BTreeSet<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Form field \"{0}\" is defined twice")]
    DuplicateField(String),
    #[error("Form has no field \"{0}\"")]
    MissingField(String),
    #[error("Form field \"{0}\" holds a different kind of value")]
    KindMismatch(String),
}

/// Submitted values keyed by field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    /// Initial values for `fields`. Field names must be unique.
    pub fn from_fields(fields: &[FormField]) -> Result<Self, FormError> {
        let mut values = BTreeMap::new();
        for field in fields {
            if values.insert(field.name.clone(), field.initial_value()).is_some() {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { values })
    }

    pub fn text(&self, name: &str) -> Result<&str, FormError> {
        match self.values.get(name) {
            Some(FieldValue::Single(value)) => Ok(value),
            Some(FieldValue::Set(_)) => Err(FormError::KindMismatch(name.to_string())),
            None => Err(FormError::MissingField(name.to_string())),
        }
    }

    pub fn selected(&self, name: &str) -> Result<&BTreeSet<String>, FormError> {
        match self.values.get(name) {
            Some(FieldValue::Set(set)) => Ok(set),
            Some(FieldValue::Single(_)) => Err(FormError::KindMismatch(name.to_string())),
            None => Err(FormError::MissingField(name.to_string())),
        }
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        match self.values.get_mut(name) {
            Some(FieldValue::Single(current)) => {
                *current = value.into();
                Ok(())
            }
            Some(FieldValue::Set(_)) => Err(FormError::KindMismatch(name.to_string())),
            None => Err(FormError::MissingField(name.to_string())),
        }
    }

    pub fn toggle(&mut self, name: &str, option: &str, checked: bool) -> Result<(), FormError> {
        match self.values.get_mut(name) {
            Some(FieldValue::Set(set)) => {
                if checked {
                    set.insert(option.to_string());
                } else {
                    set.remove(option);
                }
                Ok(())
            }
            Some(FieldValue::Single(_)) => Err(FormError::KindMismatch(name.to_string())),
            None => Err(FormError::MissingField(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Renders `fields` and reports their values on submit.
#[component]
pub fn Form(
    #[props(default)] heading: String,
    fields: Vec<FormField>,
    #[props(default = "Submit".to_string())] submit_label: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<FormValues>,
) -> Element {
    let initial = FormValues::from_fields(&fields);
    let setup_error = initial.as_ref().err().map(|e| e.to_string());
    let mut values = use_signal(move || initial.unwrap_or_default());

    if let Some(error) = setup_error {
        tracing::error!("{}", error);
        return rsx! {
            div { class: "form-error", "{error}" }
        };
    }

    let mut update = move |name: String, value: String| {
        if let Err(e) = values.write().set_text(&name, value) {
            tracing::warn!("{}", e);
        }
    };

    rsx! {
        form {
            class: "form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if busy {
                    return;
                }
                on_submit.call(values());
            },

            if !heading.is_empty() {
                h2 { class: "form-heading", "{heading}" }
            }

            for field in fields.iter().cloned() {
                div {
                    key: "{field.name}",
                    class: "form-row",
                    {match field.kind {
                        FieldKind::Radio => rsx! {
                            span { class: "label", "{field.label}" }
                            div {
                                class: "form-choices",
                                for option in field.options.iter().cloned() {
                                    label {
                                        key: "{option}",
                                        input {
                                            r#type: "radio",
                                            name: "{field.name}",
                                            value: "{option}",
                                            disabled: busy,
                                            checked: values.read().text(&field.name).is_ok_and(|v| v == option),
                                            onchange: {
                                                let name = field.name.clone();
                                                let option = option.clone();
                                                move |_| update(name.clone(), option.clone())
                                            },
                                        }
                                        " {option}"
                                    }
                                }
                            }
                        },
                        FieldKind::Checkbox => rsx! {
                            span { class: "label", "{field.label}" }
                            div {
                                class: "form-choices",
                                for option in field.options.iter().cloned() {
                                    label {
                                        key: "{option}",
                                        input {
                                            r#type: "checkbox",
                                            name: "{field.name}",
                                            value: "{option}",
                                            disabled: busy,
                                            checked: values.read().selected(&field.name).is_ok_and(|s| s.contains(&option)),
                                            onchange: {
                                                let name = field.name.clone();
                                                let option = option.clone();
                                                move |evt: FormEvent| {
                                                    if let Err(e) = values.write().toggle(&name, &option, evt.checked()) {
                                                        tracing::warn!("{}", e);
                                                    }
                                                }
                                            },
                                        }
                                        " {option}"
                                    }
                                }
                            }
                        },
                        kind => rsx! {
                            Label { html_for: "field-{field.name}", "{field.label}" }
                            Input {
                                id: "field-{field.name}",
                                name: field.name.clone(),
                                r#type: kind.input_type().to_string(),
                                value: values.read().text(&field.name).unwrap_or_default().to_string(),
                                min: field.min.clone().unwrap_or_default(),
                                max: field.max.clone().unwrap_or_default(),
                                disabled: busy,
                                oninput: {
                                    let name = field.name.clone();
                                    move |evt: FormEvent| update(name.clone(), evt.value())
                                },
                            }
                        },
                    }}
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: busy,
                if busy { "Please wait..." } else { "{submit_label}" }
            }
        }
    }
}
