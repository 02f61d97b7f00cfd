use dioxus::prelude::*;

use wedding_common::clipboard::{CopyFeedback, COPY_FEEDBACK_MS};
use wedding_common::config::BankAccount;
use wedding_common::notice::Notice;

use super::app::{PageHeader, Route};
use super::browser::{copy_to_clipboard, sleep_ms};
use super::toast::{notify, use_toasts};
use super::wedding_state::use_wedding_config;

#[component]
pub fn GiftView() -> Element {
    let config = use_wedding_config();
    let nav = use_navigator();
    let mut bride = use_signal(|| config.couple.bride.clone());
    let mut groom = use_signal(|| config.couple.groom.clone());
    let copied = use_signal(CopyFeedback::default);

    rsx! {
        div { class: "gift-page",
            PageHeader { title: "Wedding Gift" }

            div { class: "card intro-card",
                h2 { "Gift to the Groom and Bride" }
                p { class: "muted",
                    "Your presence is the greatest gift, but if you wish to honor us with a wedding gift, here are our details"
                }
            }

            div { class: "card couple-card",
                h3 { "For the Happy Couple" }
                div { class: "couple-inputs",
                    div { class: "form-group",
                        label { r#for: "bride-name", "Bride's Name" }
                        input {
                            id: "bride-name",
                            value: "{bride}",
                            oninput: move |evt| bride.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "groom-name", "Groom's Name" }
                        input {
                            id: "groom-name",
                            value: "{groom}",
                            oninput: move |evt| groom.set(evt.value()),
                        }
                    }
                }
                p { class: "couple-display", "{groom} & {bride}" }
            }

            div { class: "accounts",
                h3 { "Bank Account Information" }
                for account in config.bank_accounts.iter() {
                    AccountCard { key: "{account.id}", account: account.clone(), copied }
                }
            }

            div { class: "card thanks-card",
                p { class: "strong", "Thank You! 💕" }
                p { class: "muted",
                    "Your love, prayers, and presence at our wedding are the greatest gifts we could receive. "
                    "If you choose to honor us with a monetary gift, we are deeply grateful and will treasure your kindness always."
                }
                p { class: "signature", "- With love, {groom} & {bride}" }
            }

            div { class: "menu-grid",
                button { onclick: move |_| { nav.push(Route::Messages {}); }, "Send Message" }
                button { onclick: move |_| { nav.push(Route::PartyDetails {}); }, "Wedding Details" }
            }

            div { class: "card qr-card",
                p { class: "muted", "QR Code for digital payments coming soon" }
            }
        }
    }
}

#[component]
fn AccountCard(account: BankAccount, copied: Signal<CopyFeedback>) -> Element {
    let mut copied = copied;
    let toasts = use_toasts();
    let is_copied = copied.read().is_copied(&account.id);

    let copy = {
        let id = account.id.clone();
        let number = account.account_number.clone();
        move |_| {
            copied.write().mark(id.clone());
            tracing::debug!("Copied account number for {id}");
            let number = number.clone();
            spawn(async move { copy_to_clipboard(number).await });
            spawn(async move {
                sleep_ms(COPY_FEEDBACK_MS).await;
                copied.write().clear();
            });
            notify(
                toasts,
                Notice::success(
                    "Account number copied! 📋",
                    "The account number has been copied to your clipboard",
                ),
            );
        }
    };

    let open_bank = {
        let bank = account.bank.clone();
        move |_| {
            notify(
                toasts,
                Notice::success("Opening bank app... 📱", format!("Opening {bank} mobile banking app")),
            );
        }
    };

    rsx! {
        div { class: "card account-card",
            h4 { "{account.holder}" }
            div { class: "account-row",
                p { class: "muted", "Bank" }
                p { class: "strong", "{account.bank}" }
            }
            div { class: "account-row",
                p { class: "muted", "Account Name" }
                p { class: "strong", "{account.account_name}" }
            }
            div { class: "account-row",
                p { class: "muted", "Account Number" }
                div { class: "account-number",
                    code { "{account.account_number}" }
                    button {
                        class: if is_copied { "copy-btn copied" } else { "copy-btn" },
                        onclick: copy,
                        if is_copied { "✓ Copied" } else { "Copy" }
                    }
                }
            }
            button { class: "btn-wedding", onclick: open_bank, "Open {account.bank} App" }
        }
    }
}
