//! 抽出結果コンポーネント
//!
//! テキストが空ならテキスト欄、画像が無ければグリッドを出さない

use std::sync::Arc;

use leptos::prelude::*;
use pdf_extractor_common::{image_alt, image_data_url, ExtractedData};

use crate::download::download_image;

#[component]
pub fn ExtractedContent<F>(
    #[prop(into)] data: Signal<Arc<ExtractedData>>,
    on_open: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    let has_text = move || data.with(|d| d.has_text());
    let has_images = move || data.with(|d| d.has_images());

    view! {
        <div class="extracted-content">
            <Show when=has_text>
                <section class="panel text-panel">
                    <h2>"Extracted Text"</h2>
                    <pre class="extracted-text">{move || data.with(|d| d.text.clone())}</pre>
                </section>
            </Show>

            <Show when=has_images>
                <section class="panel image-panel">
                    <h2>"Extracted Images"</h2>
                    <div class="image-grid">
                        {
                            let on_open = on_open.clone();
                            move || {
                                data.with(|d| {
                                    d.images
                                        .iter()
                                        .enumerate()
                                        .map(|(index, image)| view! {
                                            <ImageCard
                                                index=index
                                                image=image.clone()
                                                on_open=on_open.clone()
                                            />
                                        })
                                        .collect_view()
                                })
                            }
                        }
                    </div>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn ImageCard<F>(index: usize, image: String, on_open: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    let src = image_data_url(&image);

    view! {
        <figure class="image-card">
            <img
                src=src
                alt=image_alt(index)
                class="extracted-image"
                on:click=move |_| on_open(index)
            />
            <button
                class="btn btn-small download-btn"
                on:click=move |_| download_image(&image, index)
            >
                "Download"
            </button>
        </figure>
    }
}
