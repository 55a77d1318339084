//! 型定義

use serde::{Deserialize, Serialize};

/// 抽出結果（正規化済み）
///
/// アップロード成功ごとに丸ごと置き換えられる。
/// `images` の並び順がギャラリー表示、ダウンロード名、全画面カーソル位置の基準になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedData {
    /// 抽出テキスト（空の場合あり）
    #[serde(default)]
    pub text: String,
    /// Base64エンコードされたPNG画像（data URLプレフィックスなし）
    #[serde(default)]
    pub images: Vec<String>,
}

impl ExtractedData {
    pub fn new(text: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            text: text.into(),
            images,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_text() && !self.has_images()
    }
}

/// アップロード状態のスナップショット
///
/// 状態遷移のたびにリスナーへ通知される
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadStatus {
    pub busy: bool,
    pub last_error: Option<String>,
    pub has_file: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_data_default_is_empty() {
        let data = ExtractedData::default();
        assert!(data.is_empty());
        assert!(!data.has_text());
        assert!(!data.has_images());
        assert_eq!(data.image_count(), 0);
    }

    #[test]
    fn test_extracted_data_accessors() {
        let data = ExtractedData::new("Hello", vec!["A".to_string(), "B".to_string()]);
        assert!(data.has_text());
        assert_eq!(data.image_count(), 2);
        assert_eq!(data.images[1], "B");
    }

    #[test]
    fn test_extracted_data_deserialize_missing_fields() {
        let data: ExtractedData = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert_eq!(data, ExtractedData::default());
    }
}
