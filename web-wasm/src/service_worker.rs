//! Service Worker登録
//!
//! 登録結果はログに出すだけで、アプリの動作には影響させない

use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::config::SERVICE_WORKER_URL;

pub fn register() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();

    spawn_local(async move {
        match JsFuture::from(container.register(SERVICE_WORKER_URL)).await {
            Ok(_) => log::info!("Service Worker registered: {}", SERVICE_WORKER_URL),
            Err(e) => log::warn!("Service Worker registration failed: {:?}", e),
        }
    });
}
