use dioxus::prelude::*;

use wedding_common::carousel::{likes_label, Carousel};
use wedding_common::session::DEFAULT_GUEST;

use super::app::Route;
use super::session_state::use_session;
use super::wedding_state::use_wedding_config;

/// Feed-style landing page: stories row, announcement post, love-story
/// carousel and the wedding menu.
#[component]
pub fn HomeView() -> Element {
    let config = use_wedding_config();
    let session = use_session();
    let nav = use_navigator();
    let photos = config.photos.clone();
    let mut carousel = use_signal(|| Carousel::new(photos.len()));
    let mut liked = use_signal(|| false);

    let current_guest = session.read().current_guest_or(DEFAULT_GUEST);
    let couple = config.couple.display();
    let handle = config.handle.clone();
    let position = carousel.read().index();
    let position_label = carousel.read().position_label();
    let photo = photos.get(position).cloned();

    rsx! {
        div { class: "home-page",
            header { class: "page-header",
                h1 { "♥ {couple}" }
                nav {
                    button { onclick: move |_| { nav.push(Route::PartyDetails {}); }, "Details" }
                    button { onclick: move |_| { nav.push(Route::Messages {}); }, "Messages" }
                    button { onclick: move |_| { nav.push(Route::Settings {}); }, "Settings" }
                }
            }

            div { class: "stories",
                for (i, story) in config.stories.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if i == 0 { "story active" } else { "story" },
                        img { src: "{story.image}", alt: "{story.caption}" }
                        p { "{story.caption}" }
                    }
                }
            }

            div { class: "post",
                div { class: "post-header",
                    p { class: "post-handle", "{handle}" }
                    p { class: "muted", "Our Wedding Day" }
                }
                div { class: "hero",
                    h2 { "Wedding of" }
                    h3 { "{couple}" }
                }
                div { class: "post-actions",
                    button {
                        class: if liked() { "like-btn liked" } else { "like-btn" },
                        onclick: move |_| liked.toggle(),
                        "♥"
                    }
                    button { onclick: move |_| { nav.push(Route::Messages {}); }, "Comment" }
                    button { onclick: move |_| { nav.push(Route::Gift {}); }, "Gift" }
                    button { onclick: move |_| { nav.push(Route::PartyDetails {}); }, "Location" }
                }
                p { class: "likes", "{likes_label(liked())}" }
                p {
                    span { class: "post-handle", "{handle} " }
                    "We're getting married! Join us for our special day. Tap the location pin for details 💕"
                }
                p { class: "muted", "Welcome, {current_guest}!" }
            }

            div { class: "post love-story",
                div { class: "post-header",
                    p { class: "post-handle", "Our Love Story" }
                    p { class: "muted", "Journey to Forever" }
                }
                if let Some(photo) = photo {
                    div { class: "carousel",
                        img { src: "{photo.image}", alt: "{photo.caption}" }
                        button { class: "carousel-prev", onclick: move |_| carousel.write().prev_photo(), "‹" }
                        button { class: "carousel-next", onclick: move |_| carousel.write().next_photo(), "›" }
                        div { class: "carousel-dots",
                            for i in 0..photos.len() {
                                span {
                                    key: "{i}",
                                    class: if i == position { "dot active" } else { "dot" },
                                }
                            }
                        }
                    }
                    p { "{photo.caption}" }
                    p { class: "muted", "{position_label}" }
                }
            }

            div { class: "menu",
                h3 { "Wedding Menu" }
                div { class: "menu-grid",
                    button { onclick: move |_| { nav.push(Route::PartyDetails {}); }, "Wedding Details" }
                    button { onclick: move |_| { nav.push(Route::Messages {}); }, "Send Message" }
                    button { onclick: move |_| { nav.push(Route::Gift {}); }, "Wedding Gift" }
                    button { onclick: move |_| { nav.push(Route::Settings {}); }, "Settings" }
                }
            }
        }
    }
}
