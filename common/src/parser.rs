//! 抽出APIレスポンスパーサー
//!
//! 外部から来たゆるい形のレスポンスを `ExtractedData` に正規化する。
//! 境界での寛容な扱いはこのモジュールに閉じ込める。

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::ExtractedData;

/// 成功レスポンス（2xx）の本文を正規化
///
/// * `text` が無い・文字列でない場合は空文字
/// * `images` / `cropped_images` が無い・配列でない場合は空
/// * 配列内の文字列以外の要素は読み飛ばす
/// * `images` の後ろに `cropped_images` を連結する
///
/// # Examples
/// ```
/// use pdf_extractor_common::normalize_response;
///
/// let data = normalize_response(r#"{"text":"Hello","images":["A"],"cropped_images":["B"]}"#).unwrap();
/// assert_eq!(data.text, "Hello");
/// assert_eq!(data.images, vec!["A", "B"]);
/// ```
pub fn normalize_response(body: &str) -> Result<ExtractedData> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("JSON parse error: {}", e)))?;
    normalize_value(&value)
}

/// パース済みJSONを正規化
pub fn normalize_value(value: &Value) -> Result<ExtractedData> {
    let Some(map) = value.as_object() else {
        return Err(Error::MalformedResponse("JSON object not found".to_string()));
    };

    let text = get_string(map, "text").unwrap_or_default();
    let mut images = get_string_array(map, "images");
    images.extend(get_string_array(map, "cropped_images"));

    Ok(ExtractedData { text, images })
}

/// 失敗レスポンス（非2xx）をエラーに変換
///
/// 本文が文字列（プレーンテキストまたはJSON文字列）ならそのまま使い、
/// それ以外は汎用メッセージにフォールバックする
pub fn backend_failure(status: u16, body: &str) -> Error {
    Error::Backend {
        status,
        message: string_payload(body),
    }
}

fn string_payload(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)?.as_str().map(str::to_string)
}

fn get_string_array(map: &Map<String, Value>, key: &str) -> Vec<String> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
