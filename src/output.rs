//! 抽出結果の保存
//!
//! 画像はWeb版のダウンロードと同じ `extracted_image_{n}.png` で保存する

use crate::error::{ExtractorError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Local};
use pdf_extractor_common::{download_file_name, strip_data_url, ExtractedData};
use std::path::{Path, PathBuf};

pub const TEXT_FILE_NAME: &str = "extracted_text.txt";

#[derive(Debug, Default)]
pub struct SavedOutput {
    pub text_file: Option<PathBuf>,
    pub images: Vec<PathBuf>,
    /// デコードに失敗して保存できなかった画像
    pub skipped: Vec<ExtractorError>,
}

/// デフォルトの出力ディレクトリ名
pub fn default_output_dir(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("extracted_{}", now.format("%Y%m%d_%H%M%S")))
}

/// Base64画像1枚をデコードして保存
pub fn save_image(dir: &Path, image_data: &str, index: usize) -> Result<PathBuf> {
    let file_name = download_file_name(index);
    let bytes = STANDARD
        .decode(strip_data_url(image_data).trim())
        .map_err(|e| ExtractorError::ImageDecode {
            file: file_name.clone(),
            reason: e.to_string(),
        })?;

    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// テキスト（空でなければ）と画像を保存
pub fn save_extracted(data: &ExtractedData, dir: &Path, include_images: bool) -> Result<SavedOutput> {
    std::fs::create_dir_all(dir)?;
    let mut saved = SavedOutput::default();

    if data.has_text() {
        let path = dir.join(TEXT_FILE_NAME);
        std::fs::write(&path, &data.text)?;
        saved.text_file = Some(path);
    }

    if include_images {
        for (index, image) in data.images.iter().enumerate() {
            match save_image(dir, image, index) {
                Ok(path) => saved.images.push(path),
                Err(e @ ExtractorError::ImageDecode { .. }) => {
                    log::warn!("{}", e);
                    saved.skipped.push(e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(saved)
}
