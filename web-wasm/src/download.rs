//! 画像ダウンロード
//!
//! 一時的な `<a download>` をクリックして保存させる

use pdf_extractor_common::{download_file_name, image_data_url};
use wasm_bindgen::prelude::*;
use web_sys::HtmlAnchorElement;

/// Base64画像を `extracted_image_{index+1}.png` として保存
pub fn download_image(image_data: &str, index: usize) {
    if let Err(e) = trigger_download(&image_data_url(image_data), &download_file_name(index)) {
        log::error!("image download failed: {:?}", e);
    }
}

fn trigger_download(href: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body not available"))?;

    let link = create_link(&document, href, file_name)?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

fn create_link(
    document: &web_sys::Document,
    href: &str,
    file_name: &str,
) -> Result<HtmlAnchorElement, JsValue> {
    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(href);
    link.set_download(file_name);
    Ok(link)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_link_uses_deterministic_file_name() {
        let document = web_sys::window().unwrap().document().unwrap();
        let link = create_link(&document, &image_data_url("iVBORw0KGgo="), &download_file_name(2))
            .expect("リンク作成失敗");

        assert_eq!(link.download(), "extracted_image_3.png");
        assert!(link.href().starts_with("data:image/png;base64,"));
    }
}
