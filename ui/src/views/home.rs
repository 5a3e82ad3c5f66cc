use api::User;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    crate::i18n::init();

    let users = use_resource(|| async move { api::list_users().await });

    let body = match &*users.read_unchecked() {
        None => rsx! {
            p { class: "page-home__empty", {crate::t!("home-loading")} }
        },
        Some(Err(err)) => rsx! {
            p { class: "alert alert-danger",
                {crate::t!("home-load-error", error = err.to_string())}
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "page-home__empty", {crate::t!("home-empty")} }
        },
        Some(Ok(list)) => rsx! { UserTable { users: list.clone() } },
    };

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            {body}
        }
    }
}

#[component]
fn UserTable(users: Vec<User>) -> Element {
    rsx! {
        table { class: "table table-striped page-home__table",
            thead {
                tr {
                    th { scope: "col", {crate::t!("home-column-id")} }
                    th { scope: "col", {crate::t!("home-column-username")} }
                    th { scope: "col", {crate::t!("home-column-name")} }
                    th { scope: "col", {crate::t!("home-column-email")} }
                }
            }
            tbody {
                for user in users {
                    tr { key: "{user.id}",
                        th { scope: "row", "{user.id}" }
                        td { "{user.username}" }
                        td { "{user.name}" }
                        td { "{user.email}" }
                    }
                }
            }
        }
    }
}
