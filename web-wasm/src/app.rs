//! メインアプリケーションコンポーネント
//!
//! 抽出結果と全画面表示の状態はここだけが持つ

use std::sync::Arc;

use leptos::prelude::*;
use pdf_extractor_common::{ExtractedData, ViewerState};

use crate::components::{
    extracted_content::ExtractedContent,
    fullscreen_viewer::FullscreenViewer,
    header::Header,
    upload_area::UploadArea,
};

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ViewerState::default());
    // 全画面の開閉では同じArcを指すので再描画されない
    let data = Memo::new(move |_| state.with(|s| Arc::clone(s.data())));

    // 成功時のみ結果を置き換える（全画面表示は閉じる）
    let on_extracted = move |data: ExtractedData| {
        state.update(|s| s.replace_data(data));
    };

    let on_open = move |index: usize| {
        state.update(|s| {
            if let Err(e) = s.open_fullscreen(index) {
                log::warn!("fullscreen not opened: {}", e);
            }
        });
    };

    let on_close = move || {
        state.update(|s| s.close_fullscreen());
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea on_extracted=on_extracted />

            <ExtractedContent data=data on_open=on_open />

            <Show when=move || state.with(|s| s.is_fullscreen_open())>
                {move || {
                    let (data, open_index) = state.with_untracked(|s| {
                        (Arc::clone(s.data()), s.open_index().unwrap_or_default())
                    });
                    view! {
                        <FullscreenViewer
                            data=data
                            open_index=open_index
                            on_close=on_close
                        />
                    }
                }}
            </Show>
        </div>
    }
}
