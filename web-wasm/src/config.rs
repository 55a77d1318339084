//! ビルド時設定

use pdf_extractor_common::DEFAULT_EXTRACT_API_URL;

/// Service Workerのスクリプト位置
pub const SERVICE_WORKER_URL: &str = "/sw.js";

/// キーワード入力の初期値
pub const DEFAULT_KEYWORD: &str = "Name";

/// 抽出APIのURL
///
/// ビルド時に `PDF_EXTRACT_API_URL` が設定されていればそれを使う
pub fn extract_api_url() -> &'static str {
    option_env!("PDF_EXTRACT_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_EXTRACT_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_api_url_not_empty() {
        assert!(extract_api_url().starts_with("http"));
    }
}
