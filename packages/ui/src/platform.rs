//! Small browser helpers with native fallbacks.

use dioxus::prelude::*;

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Auto-confirming: {}", message);
        true
    }
}

/// Origin of the running app, used to build share links.
pub fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "http://localhost:8080".to_string()
    }
}

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) {
    match serde_json::to_string(text) {
        Ok(quoted) => {
            let _ = document::eval(&format!("navigator.clipboard.writeText({quoted})"));
        }
        Err(e) => tracing::warn!("Failed to quote clipboard text: {}", e),
    }
}

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Read the first file picked in a file input.
pub async fn picked_file(evt: &FormEvent) -> Option<api::FileUpload> {
    let file = evt.files().into_iter().next()?;
    match file.read_bytes().await {
        Ok(bytes) => Some(api::FileUpload {
            name: file.name(),
            bytes: bytes.to_vec(),
            content_type: file.content_type(),
        }),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", file.name(), e);
            None
        }
    }
}
