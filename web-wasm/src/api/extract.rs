//! 抽出APIへの送信（fetch + FormData）

use pdf_extractor_common::{ExtractClient, HttpReply};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestCredentials, RequestInit, RequestMode, Response};

/// ブラウザの `fetch` を使う抽出APIクライアント
#[derive(Debug, Clone)]
pub struct FetchExtractClient {
    endpoint: String,
}

impl FetchExtractClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    async fn send(&self, file: &File, keyword: Option<&str>) -> Result<HttpReply, JsValue> {
        let form = build_form_data(file, keyword)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        // Cookie等の資格情報を付けて送る
        opts.set_credentials(RequestCredentials::Include);
        opts.set_body(&form);

        let request = Request::new_with_str_and_init(&self.endpoint, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let body = JsFuture::from(resp.text()?).await?;

        Ok(HttpReply {
            status: resp.status(),
            body: body.as_string().unwrap_or_default(),
        })
    }
}

impl ExtractClient for FetchExtractClient {
    type File = File;

    async fn post_pdf(&self, file: &File, keyword: Option<&str>) -> Result<HttpReply, String> {
        self.send(file, keyword)
            .await
            .map_err(|e| format!("fetch failed: {:?}", e))
    }
}

/// multipart本文を作成（`file` と任意の `keyword`）
pub fn build_form_data(file: &File, keyword: Option<&str>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", file, &file.name())?;
    if let Some(keyword) = keyword {
        form.append_with_str("keyword", keyword)?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_extractor_common::DEFAULT_EXTRACT_API_URL;

    #[test]
    fn test_client_keeps_endpoint() {
        let client = FetchExtractClient::new(DEFAULT_EXTRACT_API_URL);
        assert_eq!(client.endpoint, "http://localhost:8000/extract-text");
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_pdf() -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str("%PDF-1.4"));
        File::new_with_str_sequence(&parts, "sample.pdf").expect("File作成失敗")
    }

    #[wasm_bindgen_test]
    fn wasm_form_data_includes_keyword() {
        let form = build_form_data(&sample_pdf(), Some("Name")).expect("FormData作成失敗");
        assert!(form.has("file"));
        assert_eq!(form.get("keyword").as_string().as_deref(), Some("Name"));
    }

    #[wasm_bindgen_test]
    fn wasm_form_data_omits_missing_keyword() {
        let form = build_form_data(&sample_pdf(), None).expect("FormData作成失敗");
        assert!(form.has("file"));
        assert!(!form.has("keyword"));
    }
}
