use dioxus::prelude::*;

use wedding_common::guest::GuestId;
use wedding_common::invite::personal_link;
use wedding_common::notice::Notice;

use super::app::{PageHeader, Route};
use super::browser::{copy_to_clipboard, page_origin};
use super::session_state::use_session;
use super::toast::{notify, use_toasts};
use super::wedding_state::{use_wedding_config, use_wedding_state};

/// Guest-list management, invitation sharing and logout.
#[component]
pub fn SettingsView() -> Element {
    let config = use_wedding_config();
    let mut session = use_session();
    let mut state = use_wedding_state();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut new_guest = use_signal(String::new);
    let mut editing = use_signal(|| None::<GuestId>);
    let mut editing_name = use_signal(String::new);

    let origin = page_origin();
    let couple = config.couple.display();
    let date = config.date_label();
    let current_user = session.read().current_guest_or("Admin");
    let guests: Vec<(GuestId, String)> = state
        .read()
        .guests
        .iter()
        .map(|g| (g.id, g.name.clone()))
        .collect();
    let guest_count = guests.len();
    let summary = state.read().board.rsvp_summary();

    let mut add_guest = move || {
        let name = new_guest.read().clone();
        match state.write().guests.add(&name) {
            Ok(id) => {
                tracing::info!("Added guest {:?}: {}", id, name.trim());
                new_guest.set(String::new());
                notify(
                    toasts,
                    Notice::success(
                        "Guest added! 👥",
                        format!("{} has been added to the guest list", name.trim()),
                    ),
                );
            }
            Err(err) => notify(toasts, err.into()),
        }
    };

    let mut save_edit = move || {
        let Some(id) = editing() else { return };
        let name = editing_name.read().clone();
        match state.write().guests.rename(id, &name) {
            Ok(()) => {
                tracing::info!("Renamed guest {:?} to {}", id, name.trim());
                editing.set(None);
                editing_name.set(String::new());
                notify(
                    toasts,
                    Notice::success("Guest updated! ✅", "Guest information has been updated"),
                );
            }
            Err(err) => notify(toasts, err.into()),
        }
    };

    let copy_general_link = {
        let origin = origin.clone();
        move |_| {
            let origin = origin.clone();
            spawn(async move { copy_to_clipboard(origin).await });
            notify(
                toasts,
                Notice::success("Link copied! 📋", "General invitation link copied to clipboard"),
            );
        }
    };

    let share_invitation = {
        let origin = origin.clone();
        move |_| {
            let origin = origin.clone();
            spawn(async move { copy_to_clipboard(origin).await });
            notify(
                toasts,
                Notice::success("Link copied! 📋", "Invitation link copied to clipboard"),
            );
        }
    };

    rsx! {
        div { class: "settings-page",
            PageHeader { title: "Settings" }

            div { class: "card guest-list-card",
                h3 { "Guest List Management" }
                p { class: "muted", "Manage who can access the wedding invitation" }
                div { class: "add-guest",
                    input {
                        placeholder: "Add new guest name...",
                        value: "{new_guest}",
                        oninput: move |evt| new_guest.set(evt.value()),
                        onkeypress: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                add_guest();
                            }
                        },
                    }
                    button { onclick: move |_| add_guest(), "+" }
                }

                p { class: "strong", "Current Guests ({guest_count})" }
                for (id, name) in guests.into_iter() {
                    if editing() == Some(id) {
                        div { key: "{id.0}", class: "guest-row editing",
                            input {
                                value: "{editing_name}",
                                oninput: move |evt| editing_name.set(evt.value()),
                                onkeypress: move |evt: KeyboardEvent| {
                                    if evt.key() == Key::Enter {
                                        save_edit();
                                    }
                                },
                            }
                            button { class: "btn-wedding", onclick: move |_| save_edit(), "Save" }
                            button {
                                onclick: move |_| {
                                    editing.set(None);
                                    editing_name.set(String::new());
                                },
                                "×"
                            }
                        }
                    } else {
                        GuestRow { key: "{id.0}", id, name, editing, editing_name }
                    }
                }
            }

            div { class: "card share-card",
                h3 { "Share Invitation" }
                p { class: "strong", "General Invitation Link" }
                div { class: "url-copy-row",
                    input { value: "{origin}", readonly: true }
                    button { onclick: copy_general_link, "Copy" }
                }
                button { class: "btn-share", onclick: share_invitation, "Share Wedding Invitation" }
            }

            div { class: "card info-card",
                h3 { "Wedding Information" }
                div { class: "info-row", span { class: "muted", "Couple:" } span { class: "strong", "{couple}" } }
                div { class: "info-row", span { class: "muted", "Date:" } span { class: "strong", "{date}" } }
                div { class: "info-row", span { class: "muted", "Total Guests:" } span { class: "strong", "{guest_count}" } }
                div { class: "info-row",
                    span { class: "muted", "RSVPs:" }
                    span { class: "strong", "{summary.attending} attending, {summary.not_attending} declined, {summary.maybe} maybe" }
                }
                div { class: "info-row", span { class: "muted", "Current User:" } span { class: "strong", "{current_user}" } }
            }

            div { class: "menu-grid",
                button { onclick: move |_| { nav.push(Route::Messages {}); }, "View Messages" }
                button { onclick: move |_| { nav.push(Route::PartyDetails {}); }, "Wedding Details" }
            }

            div { class: "card",
                button {
                    class: "logout-btn",
                    onclick: move |_| {
                        if let Some(name) = session.read().current_guest() {
                            tracing::info!("{name} logged out");
                        }
                        session.write().clear_current_guest();
                        state.write().forget_invitation();
                        nav.push(Route::Login {});
                        notify(toasts, Notice::success("Logged out", "You have been logged out successfully"));
                    },
                    "Logout"
                }
            }

            div { class: "card tip-card",
                p { class: "muted",
                    "💡 Tip: Use personalized invitation links to track RSVPs and send customized messages to each guest."
                }
            }
        }
    }
}

/// A guest entry with share, edit and remove actions.
#[component]
fn GuestRow(
    id: GuestId,
    name: String,
    editing: Signal<Option<GuestId>>,
    editing_name: Signal<String>,
) -> Element {
    let mut editing = editing;
    let mut editing_name = editing_name;
    let mut state = use_wedding_state();
    let toasts = use_toasts();

    let share = {
        let name = name.clone();
        move |_| {
            let link = personal_link(&page_origin(), &name);
            tracing::debug!("Personal link for {name}: {link}");
            spawn(async move { copy_to_clipboard(link).await });
            notify(
                toasts,
                Notice::success(
                    "Invitation link copied! 📋",
                    format!("Personal invitation link for {name} copied to clipboard"),
                ),
            );
        }
    };

    let start_edit = {
        let name = name.clone();
        move |_| {
            editing.set(Some(id));
            editing_name.set(name.clone());
        }
    };

    let remove = move |_| {
        let removed = state.write().guests.remove(id);
        match removed {
            Ok(guest) => {
                tracing::info!("Removed guest {:?}: {}", id, guest.name);
                if editing() == Some(id) {
                    editing.set(None);
                }
                notify(
                    toasts,
                    Notice::success(
                        "Guest removed",
                        format!("{} has been removed from the guest list", guest.name),
                    ),
                );
            }
            Err(err) => notify(toasts, err.into()),
        }
    };

    rsx! {
        div { class: "guest-row",
            span { class: "guest-name", "{name}" }
            button { title: "Share personal invitation", onclick: share, "Share" }
            button { title: "Edit guest name", onclick: start_edit, "✏️" }
            button { title: "Remove guest", onclick: remove, "🗑" }
        }
    }
}
