//! Thin wrappers over the browser APIs the views touch.
//!
//! The app only ships for the browser. Native builds exist for `cargo test`,
//! where these degrade to no-ops.

/// `window.location.origin`, used as the general invitation link.
pub fn page_origin() -> String {
    #[cfg(target_family = "wasm")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
        tracing::error!("Could not read window.location.origin");
    }
    String::new()
}

/// Write text to the system clipboard. Failures are logged, never surfaced.
pub async fn copy_to_clipboard(text: String) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let promise = clipboard.write_text(&text);
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::error!("Clipboard write failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_family = "wasm"))]
    tracing::debug!("Clipboard unavailable, dropping {} bytes", text.len());
}

/// Open a URL in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::error!("Failed to open {url}: {:?}", e);
            }
        }
    }
    #[cfg(not(target_family = "wasm"))]
    tracing::debug!("Would open {url}");
}

/// One-shot delay on the UI runtime.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_family = "wasm"))]
    let _ = ms;
}

#[cfg(test)]
mod tests {
    const MANIFEST: &str = include_str!("../../Cargo.toml");

    #[test]
    fn only_the_web_platform_is_offered() {
        assert!(MANIFEST.contains(r#"web = ["dioxus/web", "dioxus/router"]"#));
        for platform in ["dioxus/mobile", "dioxus/desktop"] {
            assert!(!MANIFEST.contains(platform), "{platform} has no timer or durable session");
        }
    }
}
