//! 全画面ビューアコンポーネント
//!
//! 表示中のみキーボード操作を受け付ける（←/→で移動、Escで閉じる）。
//! 背景クリックで閉じ、画像やボタンのクリックは背景へ伝播させない。

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use pdf_extractor_common::{
    image_data_url, ClickTarget, ExtractedData, FullscreenSession, ViewerAction, ViewerOutcome,
};
use web_sys::{KeyboardEvent, MouseEvent};

use crate::download::download_image;

#[component]
pub fn FullscreenViewer<F>(data: Arc<ExtractedData>, open_index: usize, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send + Sync,
{
    let session = match FullscreenSession::open(data.image_count(), open_index) {
        Ok(session) => RwSignal::new(session),
        Err(error) => {
            log::warn!("cannot open fullscreen viewer: {}", error);
            return ().into_any();
        }
    };
    let data = StoredValue::new(data);

    let close_on = move |outcome: ViewerOutcome| {
        if outcome == ViewerOutcome::Close {
            on_close();
        }
    };

    let key_listener = window_event_listener(ev::keydown, {
        let close_on = close_on.clone();
        move |ev: KeyboardEvent| {
            if let Some(outcome) = session.try_update(|s| s.handle_key(&ev.key())).flatten() {
                ev.prevent_default();
                close_on(outcome);
            }
        }
    });
    on_cleanup(move || key_listener.remove());

    // 背景以外は伝播を止め、背景のハンドラに届かないようにする
    let on_click = move |target: ClickTarget, ev: &MouseEvent| {
        if target != ClickTarget::Background {
            ev.stop_propagation();
        }
        if let Some(outcome) = session.try_update(|s| s.handle_click(target)) {
            close_on(outcome);
        }
    };

    let navigate = {
        let on_click = on_click.clone();
        move |action: ViewerAction| {
            let on_click = on_click.clone();
            move |ev: MouseEvent| {
                on_click(ClickTarget::Control, &ev);
                session.update(|s| {
                    s.dispatch(action);
                });
            }
        }
    };

    let current_src = move || {
        let index = session.with(|s| s.index());
        data.with_value(|d| d.images.get(index).map(|img| image_data_url(img)).unwrap_or_default())
    };

    let on_download = {
        let on_click = on_click.clone();
        move |ev: MouseEvent| {
            on_click(ClickTarget::Control, &ev);
            let index = session.with_untracked(|s| s.index());
            data.with_value(|d| {
                if let Some(image) = d.images.get(index) {
                    download_image(image, index);
                }
            });
        }
    };

    view! {
        <div
            class="fullscreen-overlay"
            on:click={
                let on_click = on_click.clone();
                move |ev: MouseEvent| on_click(ClickTarget::Background, &ev)
            }
        >
            <img
                src=current_src
                alt="Fullscreen"
                class="fullscreen-image"
                on:click={
                    let on_click = on_click.clone();
                    move |ev: MouseEvent| on_click(ClickTarget::Image, &ev)
                }
            />

            <button class="nav-button prev" on:click=navigate(ViewerAction::Prev)>
                "←"
            </button>

            <button class="nav-button next" on:click=navigate(ViewerAction::Next)>
                "→"
            </button>

            <button class="fullscreen-download-btn" on:click=on_download>
                "Download"
            </button>

            <span
                class="image-counter"
                on:click={
                    let on_click = on_click.clone();
                    move |ev: MouseEvent| on_click(ClickTarget::Control, &ev)
                }
            >
                {move || session.with(|s| s.counter_label())}
            </span>
        </div>
    }
    .into_any()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_data() -> Arc<ExtractedData> {
        let images = vec!["iVBORw0KGgo=".to_string(); 3];
        Arc::new(ExtractedData::new("", images))
    }

    fn container() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    /// ビューアをマウントし、閉じる通知の回数を数える
    fn mount_viewer(parent: &HtmlElement) -> (Arc<AtomicUsize>, impl Sized) {
        let closed = Arc::new(AtomicUsize::new(0));
        let on_close = {
            let closed = Arc::clone(&closed);
            move || {
                closed.fetch_add(1, Ordering::SeqCst);
            }
        };
        let data = sample_data();
        let handle = leptos::mount::mount_to(parent.clone(), move || {
            view! { <FullscreenViewer data=data open_index=0 on_close=on_close /> }
        });
        (closed, handle)
    }

    fn click(parent: &HtmlElement, selector: &str) {
        let element: HtmlElement = parent
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("{} not rendered", selector))
            .dyn_into()
            .unwrap();
        element.click();
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn wasm_image_and_controls_keep_overlay_open() {
        let parent = container();
        let (closed, _handle) = mount_viewer(&parent);

        click(&parent, ".fullscreen-image");
        click(&parent, ".nav-button.next");
        click(&parent, ".nav-button.prev");
        click(&parent, ".image-counter");
        assert_eq!(closed.load(Ordering::SeqCst), 0);

        click(&parent, ".fullscreen-overlay");
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[wasm_bindgen_test]
    fn wasm_escape_closes_once() {
        let parent = container();
        let (closed, _handle) = mount_viewer(&parent);

        press("ArrowRight");
        assert_eq!(closed.load(Ordering::SeqCst), 0);

        press("Escape");
        press("Escape");
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[wasm_bindgen_test]
    fn wasm_key_listener_removed_on_unmount() {
        let parent = container();
        let (closed, handle) = mount_viewer(&parent);
        drop(handle);

        assert!(parent.query_selector(".fullscreen-overlay").unwrap().is_none());
        press("ArrowRight");
        press("Escape");
        assert_eq!(closed.load(Ordering::SeqCst), 0);
    }
}
