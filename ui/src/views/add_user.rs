use api::{NewUser, User};
use crate::components::navbar::home_link;
use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Registration form for a new user, submitted through `api::add_user`.
#[component]
pub fn AddUser() -> Element {
    crate::i18n::init();

    let mut username = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut outcome = use_signal(|| None::<Result<User, String>>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = NewUser::new(username(), name(), email());
        spawn(async move {
            match api::add_user(draft).await {
                Ok(user) => {
                    tracing::info!(id = user.id, "user registered");
                    username.set(String::new());
                    name.set(String::new());
                    email.set(String::new());
                    outcome.set(Some(Ok(user)));
                }
                Err(err) => {
                    tracing::warn!(%err, "user registration failed");
                    outcome.set(Some(Err(err.to_string())));
                }
            }
        });
    };

    let on_reset = move |_: MouseEvent| {
        username.set(String::new());
        name.set(String::new());
        email.set(String::new());
        outcome.set(None);
    };

    let back = home_link(&crate::t!("add-user-back"));

    rsx! {
        section { class: "page add-user",
            h2 { class: "text-center mb-4", {crate::t!("add-user-title")} }
            form { onsubmit: on_submit,
                div { class: "mb-3",
                    label { class: "form-label", r#for: "username", {crate::t!("add-user-username")} }
                    input {
                        class: "form-control",
                        id: "username",
                        name: "username",
                        r#type: "text",
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }
                }
                div { class: "mb-3",
                    label { class: "form-label", r#for: "name", {crate::t!("add-user-name")} }
                    input {
                        class: "form-control",
                        id: "name",
                        name: "name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "mb-3",
                    label { class: "form-label", r#for: "email", {crate::t!("add-user-email")} }
                    input {
                        class: "form-control",
                        id: "email",
                        name: "email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div { class: "add-user__actions",
                    {back}
                    button { class: "btn btn-outline-primary", r#type: "submit",
                        {crate::t!("add-user-submit")}
                    }
                    button {
                        class: "btn btn-outline-danger",
                        r#type: "button",
                        onclick: on_reset,
                        {crate::t!("add-user-reset")}
                    }
                }
            }
            if let Some(result) = outcome() {
                p { class: "add-user__status {status_class(&result)}", {status_message(&result)} }
            }
        }
    }
}

fn status_class(result: &Result<User, String>) -> &'static str {
    match result {
        Ok(_) => "text-success",
        Err(_) => "text-danger",
    }
}

fn status_message(result: &Result<User, String>) -> String {
    match result {
        Ok(user) => crate::t!("add-user-created", id = user.id),
        Err(error) => crate::t!("add-user-failed", error = error.clone()),
    }
}
