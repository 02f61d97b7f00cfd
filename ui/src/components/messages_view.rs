use dioxus::prelude::*;

use wedding_common::message::{Message, RsvpStatus};
use wedding_common::notice::Notice;

use super::app::PageHeader;
use super::session_state::use_session;
use super::toast::{notify, use_toasts};
use super::wedding_state::{use_wedding_config, use_wedding_state};

/// Guestbook with an optional RSVP attached to each message.
#[component]
pub fn MessagesView() -> Element {
    let config = use_wedding_config();
    let session = use_session();
    let mut state = use_wedding_state();
    let toasts = use_toasts();
    let mut author = use_signal(|| session.peek().current_guest().unwrap_or_default());
    let mut attendance = use_signal(String::new);
    let mut body = use_signal(String::new);

    let couple = config.couple.display();
    let messages: Vec<Message> = state.read().board.iter().cloned().collect();
    let summary = state.read().board.rsvp_summary();
    let count = messages.len();

    let send = {
        let couple = couple.clone();
        move |_| {
            let rsvp = RsvpStatus::from_form(&attendance.read());
            let posted = state
                .write()
                .board
                .post(&author.read(), &body.read(), rsvp)
                .map(|m| m.id);
            match posted {
                Ok(id) => {
                    tracing::debug!("Posted message {id} (rsvp: {:?})", rsvp);
                    body.set(String::new());
                    attendance.set(String::new());
                    notify(
                        toasts,
                        Notice::success(
                            "Message sent! 💕",
                            format!("Thank you for your wishes to {couple}"),
                        ),
                    );
                }
                Err(err) => notify(toasts, err.into()),
            }
        }
    };

    rsx! {
        div { class: "messages-page",
            PageHeader { title: "Messages for the Couple" }

            div { class: "card message-form",
                h2 { "Send Your Wishes" }
                div { class: "form-group",
                    label { r#for: "guest-name", "Your Name" }
                    input {
                        id: "guest-name",
                        r#type: "text",
                        placeholder: "Enter your name...",
                        value: "{author}",
                        oninput: move |evt| author.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "attendance", "Will you be attending? (Optional RSVP)" }
                    select {
                        id: "attendance",
                        value: "{attendance}",
                        onchange: move |evt| attendance.set(evt.value()),
                        option { value: "", "I'll RSVP later" }
                        for status in RsvpStatus::all() {
                            option {
                                key: "{status}",
                                value: "{status}",
                                selected: attendance() == status.as_str(),
                                "{status.prompt()}"
                            }
                        }
                    }
                }
                div { class: "form-group",
                    label { r#for: "message", "Your Message to {couple}" }
                    textarea {
                        id: "message",
                        rows: "4",
                        placeholder: "Share your wishes, memories, or advice for the happy couple...",
                        value: "{body}",
                        oninput: move |evt| body.set(evt.value()),
                    }
                }
                button { class: "btn-wedding", onclick: send, "Send Message with Love" }
            }

            div { class: "message-list",
                h3 { "Guest Messages ({count})" }
                p { class: "rsvp-summary muted",
                    "{summary.attending} attending · {summary.not_attending} can't attend · {summary.maybe} maybe"
                }
                if messages.is_empty() {
                    div { class: "card empty-state",
                        p { "No messages yet" }
                        p { class: "muted", "Be the first to send your wishes!" }
                    }
                }
                for msg in messages.iter() {
                    MessageCard { key: "{msg.id}", message: msg.clone() }
                }
            }

            div { class: "card info-card",
                p { class: "muted",
                    "💕 All messages will be collected and given to {couple} as a beautiful keepsake from their wedding day."
                }
            }
        }
    }
}

#[component]
fn MessageCard(message: Message) -> Element {
    let initial = message.initial();
    let badge_class = match message.rsvp {
        Some(RsvpStatus::Attending) => "rsvp-badge attending",
        Some(RsvpStatus::NotAttending) => "rsvp-badge not-attending",
        Some(RsvpStatus::Maybe) => "rsvp-badge maybe",
        None => "",
    };

    rsx! {
        div { class: "card message-card",
            div { class: "avatar", "{initial}" }
            div { class: "message-content",
                div { class: "message-meta",
                    p { class: "strong", "{message.author}" }
                    p { class: "muted", "{message.timestamp}" }
                }
                if let Some(status) = message.rsvp {
                    span { class: "{badge_class}", "{status.badge()}" }
                }
                p { "{message.body}" }
            }
        }
    }
}
