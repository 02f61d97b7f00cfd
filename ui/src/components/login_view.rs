use dioxus::prelude::*;

use super::app::Route;
use super::session_state::use_session;
use super::toast::{notify, use_toasts};
use super::wedding_state::{use_wedding_config, use_wedding_state};

#[component]
pub fn LoginView() -> Element {
    let config = use_wedding_config();
    let mut session = use_session();
    let mut state = use_wedding_state();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut guest_name =
        use_signal(|| state.peek().invited_guest.clone().unwrap_or_default());

    let names: Vec<String> = state
        .read()
        .guests
        .iter()
        .map(|g| g.name.clone())
        .collect();
    let couple = config.couple.display();

    let login = move |_| {
        let name = guest_name.read().clone();
        let admitted = state.write().sign_in(&name);
        if let Err(err) = admitted {
            notify(toasts, err.into());
            return;
        }
        session.write().set_current_guest(&name);
        tracing::info!("{name} logged in");
        nav.push(Route::Home {});
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-logo",
                h1 { "♥ {couple} ♥" }
                p { "Our Wedding Invitation" }
            }
            div { class: "card login-card",
                h2 { "Welcome to Our Wedding" }
                div { class: "form-group",
                    label { r#for: "guest", "Your Name" }
                    select {
                        id: "guest",
                        value: "{guest_name}",
                        onchange: move |evt| guest_name.set(evt.value()),
                        option { value: "", "Select your name..." }
                        for name in names {
                            option {
                                key: "{name}",
                                value: "{name}",
                                selected: guest_name() == name,
                                "{name}"
                            }
                        }
                    }
                }
                div { class: "form-group",
                    label { r#for: "password", "Access Code" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "*****",
                        readonly: true,
                    }
                }
                button { class: "btn-wedding", onclick: login, "Enter Wedding Invitation" }
                p { class: "muted", "Can't find your name? Please contact the couple." }
            }
            p { class: "login-footer", "With love, {couple} ❤️" }
        }
    }
}
