use dioxus::prelude::*;

use wedding_common::config::Venue;
use wedding_common::invite::maps_link;
use wedding_common::notice::Notice;

use super::app::{PageHeader, Route};
use super::browser::{copy_to_clipboard, open_in_new_tab, page_origin};
use super::notes_accordion::NotesAccordion;
use super::toast::{notify, use_toasts};
use super::wedding_state::use_wedding_config;

const NOTES_MD: &str = include_str!("../../docs/notes.md");

#[component]
pub fn PartyDetailsView() -> Element {
    let config = use_wedding_config();
    let toasts = use_toasts();
    let nav = use_navigator();
    let date = config.date_label();

    rsx! {
        div { class: "details-page",
            PageHeader { title: "Wedding Details" }

            div { class: "card date-card",
                h2 { "Our Wedding Day" }
                p { class: "date", "{date}" }
            }

            VenueCard {
                heading: "Wedding Ceremony",
                starts: "Ceremony begins",
                venue: config.ceremony.clone(),
            }
            VenueCard {
                heading: "Reception Party",
                starts: "Reception starts",
                venue: config.reception.clone(),
            }

            div { class: "card notes-card",
                h3 { "Important Information" }
                NotesAccordion { source: NOTES_MD }
            }

            div { class: "actions",
                button { class: "btn-wedding", onclick: move |_| { nav.push(Route::Messages {}); }, "RSVP & Send Message" }
                button { onclick: move |_| { nav.push(Route::Gift {}); }, "Wedding Gift" }
            }

            div { class: "card share-card",
                p { class: "muted", "Share this invitation with family and friends" }
                button {
                    class: "btn-share",
                    onclick: move |_| {
                        let origin = page_origin();
                        spawn(async move { copy_to_clipboard(origin).await });
                        notify(toasts, Notice::success("Link copied! 📋", "Invitation link copied to clipboard"));
                    },
                    "Share Invitation"
                }
            }
        }
    }
}

#[component]
fn VenueCard(heading: String, starts: String, venue: Venue) -> Element {
    let time = venue.time_label();
    let address = venue.address.clone();

    rsx! {
        div { class: "card venue-card",
            h3 { "{heading}" }
            div { class: "venue-row",
                p { class: "strong", "{time}" }
                p { class: "muted", "{starts}" }
            }
            div { class: "venue-row",
                p { class: "strong", "{venue.name}" }
                p { class: "muted", "{venue.address}" }
                button {
                    onclick: move |_| {
                        tracing::debug!("Opening map for {address}");
                        open_in_new_tab(&maps_link(&address));
                    },
                    "Open in Maps"
                }
            }
            div { class: "venue-row",
                p { class: "strong", "Contact" }
                p { class: "muted", "{venue.contact}" }
            }
        }
    }
}
