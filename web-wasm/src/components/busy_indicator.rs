//! 処理中インジケーター

use leptos::prelude::*;

#[component]
pub fn BusyIndicator(busy: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || busy.get()>
            <div class="busy-indicator" role="status">
                <span class="dot" />
                <span class="dot" />
                <span class="dot" />
                <p class="busy-text">"Extracting..."</p>
            </div>
        </Show>
    }
}
