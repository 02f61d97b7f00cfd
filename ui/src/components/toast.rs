use dioxus::prelude::*;

use wedding_common::notice::Notice;

use super::browser::sleep_ms;

/// How long a toast stays up before dismissing itself.
const TOAST_MS: u32 = 4_000;

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<(u64, Notice)>,
}

impl Toasts {
    fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.items.push((self.next_id, notice));
        self.next_id
    }

    fn dismiss(&mut self, id: u64) {
        self.items.retain(|(i, _)| *i != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a notice and schedule its removal.
pub fn notify(mut toasts: Signal<Toasts>, notice: Notice) {
    if notice.is_error() {
        tracing::warn!("{}: {}", notice.title, notice.description);
    }
    let id = toasts.write().push(notice);
    spawn(async move {
        sleep_ms(TOAST_MS).await;
        toasts.write().dismiss(id);
    });
}

#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.read().items.clone();

    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toast-stack",
            for (id, notice) in items.into_iter() {
                div {
                    key: "{id}",
                    class: if notice.is_error() { "toast toast-error" } else { "toast" },
                    onclick: move |_| toasts.write().dismiss(id),
                    p { class: "toast-title", "{notice.title}" }
                    p { class: "toast-description", "{notice.description}" }
                }
            }
        }
    }
}
