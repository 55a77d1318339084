//! アップロードエリアコンポーネント
//!
//! PDF1件の選択（ドラッグ&ドロップまたはファイル選択）、キーワード入力、送信ボタン

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pdf_extractor_common::{
    normalize_keyword, validate_pdf, ExtractedData, UploadController, UploadStatus,
};
use web_sys::{DragEvent, File};

use crate::api::extract::FetchExtractClient;
use crate::components::busy_indicator::BusyIndicator;
use crate::config::{self, DEFAULT_KEYWORD};

#[component]
pub fn UploadArea<F>(on_extracted: F) -> impl IntoView
where
    F: Fn(ExtractedData) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (status, set_status) = signal(UploadStatus::default());
    let (file_name, set_file_name) = signal(None::<String>);
    let (keyword, set_keyword) = signal(DEFAULT_KEYWORD.to_string());
    let file_input = NodeRef::<html::Input>::new();

    let controller = StoredValue::new_local(
        UploadController::new(FetchExtractClient::new(config::extract_api_url()))
            .with_status_listener(move |s: &UploadStatus| set_status.set(s.clone())),
    );
    let busy = Signal::derive(move || status.get().busy);

    let select_file = move |file: File| {
        let name = file.name();
        match validate_pdf(&name, &file.type_()) {
            Ok(()) => {
                log::debug!("selected {}", name);
                set_file_name.set(Some(name));
                controller.with_value(|c| c.select(file));
            }
            Err(error) => {
                log::warn!("rejected file: {}", error);
                controller.with_value(|c| c.report_error(&error));
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        // 複数ドロップされても先頭の1件のみ
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            select_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select_file(file);
        }
        // 同じファイルを選び直せるようにする
        input.set_value("");
    };

    let on_upload = move |_| {
        let controller = controller.get_value();
        let keyword = keyword.get_untracked();
        let on_extracted = on_extracted.clone();
        spawn_local(async move {
            // 失敗はステータス経由で表示済み。成功時のみ結果を置き換える
            if let Ok(data) = controller.submit(normalize_keyword(&keyword)).await {
                on_extracted(data);
            }
        });
    };

    view! {
        <div class="upload-panel">
            <div
                class=move || {
                    let mut classes = vec!["dropzone"];
                    if is_dragover.get() {
                        classes.push("dragover");
                    }
                    classes.join(" ")
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <div class="dropzone-icon">"📄"</div>
                <p class="dropzone-text">"Click or Drag & Drop a PDF"</p>
            </div>

            <input
                type="file"
                accept="application/pdf,.pdf"
                class="hidden-input"
                node_ref=file_input
                on:change=on_change
            />

            {move || file_name.get().map(|name| view! {
                <div class="uploaded-file">
                    <span class="file-badge">"PDF"</span>
                    <span class="file-name">{name}</span>
                </div>
            })}

            <div class="keyword-input">
                <label for="keyword">"Keyword:"</label>
                <input
                    type="text"
                    id="keyword"
                    placeholder="Enter a keyword (e.g., 'Name')"
                    prop:value=move || keyword.get()
                    on:input=move |ev| {
                        set_keyword.set(event_target_value(&ev));
                    }
                />
            </div>

            <button
                class=move || if busy.get() { "upload-btn disabled" } else { "upload-btn" }
                disabled=move || busy.get()
                on:click=on_upload
            >
                {move || if busy.get() { "Uploading..." } else { "Upload & Extract" }}
            </button>

            <BusyIndicator busy=busy />

            {move || status.get().last_error.map(|message| view! {
                <p class="error-message">{message}</p>
            })}
        </div>
    }
}
