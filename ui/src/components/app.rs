use std::fmt;

use dioxus::prelude::*;
use dioxus::router::routable::FromQuery;

use wedding_common::config::WeddingConfig;
use wedding_common::invite::{guest_from_query, guest_query};

use super::gift_view::GiftView;
use super::home_view::HomeView;
use super::login_view::LoginView;
use super::messages_view::MessagesView;
use super::party_details_view::PartyDetailsView;
use super::session_state::{new_browser_session, use_session};
use super::settings_view::SettingsView;
use super::toast::{ToastStack, Toasts};
use super::wedding_state::{use_wedding_state, WeddingState};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/?:..query")]
    Index { query: InviteQuery },
    #[route("/login")]
    Login {},
    #[route("/home")]
    Home {},
    #[route("/party-details")]
    PartyDetails {},
    #[route("/messages")]
    Messages {},
    #[route("/gift")]
    Gift {},
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Query of the entry route. Parsed from the raw query string so guest names
/// containing `&` or `+` come through intact.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InviteQuery {
    pub guest: Option<String>,
}

impl FromQuery for InviteQuery {
    fn from_query(query: &str) -> Self {
        Self {
            guest: guest_from_query(query),
        }
    }
}

impl fmt::Display for InviteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.guest {
            Some(name) => write!(f, "{}", guest_query(name)),
            None => Ok(()),
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| WeddingConfig::embedded().map_err(|e| e.to_string()));

    match config {
        Ok(config) => rsx! { WeddingApp { config } },
        Err(err) => {
            tracing::error!("{err}");
            rsx! {
                div { class: "config-error",
                    h1 { "This invitation could not be loaded" }
                    p { "{err}" }
                }
            }
        }
    }
}

#[component]
fn WeddingApp(config: WeddingConfig) -> Element {
    use_context_provider(|| Signal::new(WeddingState::seeded(&config)));
    use_context_provider(|| Signal::new(new_browser_session()));
    use_context_provider(|| Signal::new(Toasts::default()));
    use_context_provider(|| config.clone());

    rsx! {
        Router::<Route> {}
        ToastStack {}
    }
}

/// Entry point: remembers a personal-link guest, then sends the visitor to
/// the feed or the login gate depending on the stored session.
#[component]
fn Index(query: InviteQuery) -> Element {
    let session = use_session();
    let mut state = use_wedding_state();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(invited) = query.guest.clone() {
            if state.peek().guests.contains(&invited) {
                tracing::info!("Opened personal invitation for {invited}");
                state.write().invited_guest = Some(invited);
            } else {
                tracing::warn!("Personal invitation for unknown guest {invited}");
            }
        }
        if session.peek().is_logged_in() {
            nav.replace(Route::Home {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! {}
}

#[component]
fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
fn PartyDetails() -> Element {
    rsx! { PartyDetailsView {} }
}

#[component]
fn Messages() -> Element {
    rsx! { MessagesView {} }
}

#[component]
fn Gift() -> Element {
    rsx! { GiftView {} }
}

#[component]
fn Settings() -> Element {
    rsx! { SettingsView {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{path}");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Oops! /{path} doesn't exist." }
            Link { to: Route::Index { query: InviteQuery::default() }, "Return to the invitation" }
        }
    }
}

/// Sticky header with a back arrow to the feed.
#[component]
pub fn PageHeader(title: String) -> Element {
    let nav = use_navigator();

    rsx! {
        header { class: "page-header",
            button {
                class: "back-btn",
                onclick: move |_| { nav.push(Route::Home {}); },
                "←"
            }
            h1 { "{title}" }
        }
    }
}
